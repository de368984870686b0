//! News client port trait
//!
//! Defines the interface for fetching per-game news from the scraper API.

use async_trait::async_trait;

use crate::domain::entities::{Game, NewsArticle};
use crate::error::FetchError;

/// Client for the self-hosted news scraper
#[async_trait]
pub trait NewsClient: Send + Sync {
    /// Fetch the articles for a game, in the order the server returns them
    async fn fetch_news(&self, game: Game) -> Result<Vec<NewsArticle>, FetchError>;
}
