//! News interleaver
//!
//! Merges per-game article lists into one headline rotation. This is a fixed
//! round-robin over recency, not a chronological merge: article dates are
//! display strings and are never compared across games.

use serde::Serialize;

use crate::domain::entities::NewsArticle;

/// How many of the most recent articles of each game reach the rotation
pub const HEADLINES_PER_GAME: usize = 2;

/// Merge already-ordered per-game feeds.
///
/// Emits rank 0 of every non-empty feed in the given order, then rank 1 of
/// every feed that has one. Older articles are dropped.
pub fn interleave(feeds: &[Vec<NewsArticle>]) -> Vec<NewsArticle> {
    (0..HEADLINES_PER_GAME)
        .flat_map(|rank| feeds.iter().filter_map(move |feed| feed.get(rank)))
        .cloned()
        .collect()
}

/// Content of the cyclic single-item headline widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Headlines {
    /// Nothing to show; rendered as an explicit "no news" state
    NoNews,
    Rotating { items: Vec<NewsArticle> },
}

impl Headlines {
    pub fn from_articles(items: Vec<NewsArticle>) -> Self {
        if items.is_empty() {
            Headlines::NoNews
        } else {
            Headlines::Rotating { items }
        }
    }

    /// Article shown at a given rotation tick, wrapping around
    pub fn at(&self, tick: usize) -> Option<&NewsArticle> {
        match self {
            Headlines::NoNews => None,
            Headlines::Rotating { items } => items.get(tick % items.len()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Headlines::NoNews => 0,
            Headlines::Rotating { items } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Headlines::NoNews)
    }
}
