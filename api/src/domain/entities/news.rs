//! News domain entity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Game;

/// A news article fetched from the scraper.
///
/// The scraper does not provide identifiers, so `id` is synthesized on every
/// fetch and is not stable across fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    /// Display string, never parsed
    pub date: String,
    pub link: String,
    pub description: Option<String>,
    pub game: Game,
}
