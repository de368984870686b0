//! News service
//!
//! Per-game news and the combined headline rotation. Fetch failures are
//! logged and treated as "no news available"; nothing is retried.

use std::sync::Arc;

use crate::app::interleaver::{interleave, Headlines};
use crate::domain::entities::{Game, NewsArticle};
use crate::domain::ports::NewsClient;

/// Service for reading news
pub struct NewsService<NC>
where
    NC: NewsClient,
{
    client: Arc<NC>,
}

impl<NC> NewsService<NC>
where
    NC: NewsClient,
{
    pub fn new(client: Arc<NC>) -> Self {
        Self { client }
    }

    /// Articles for one game in server order, empty if the fetch failed
    pub async fn latest(&self, game: Game) -> Vec<NewsArticle> {
        match self.client.fetch_news(game).await {
            Ok(articles) => {
                tracing::debug!(%game, count = articles.len(), "Fetched news");
                articles
            }
            Err(e) => {
                tracing::warn!(%game, error = %e, "News unavailable");
                Vec::new()
            }
        }
    }

    /// Fetch every game concurrently and interleave the results
    pub async fn headlines(&self) -> Headlines {
        let (overwatch, valorant, rocket_league) = tokio::join!(
            self.latest(Game::Overwatch),
            self.latest(Game::Valorant),
            self.latest(Game::RocketLeague),
        );

        let headlines = Headlines::from_articles(interleave(&[overwatch, valorant, rocket_league]));
        if headlines.is_empty() {
            tracing::info!("No headlines from any game");
        }
        headlines
    }
}
