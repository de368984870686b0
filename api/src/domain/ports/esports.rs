//! Esports data provider port trait
//!
//! Defines the interface for fetching matches and team rosters.

use async_trait::async_trait;

use crate::domain::entities::{Game, Match, Team};
use crate::error::FetchError;

/// Query for a single page of upcoming matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    pub sort: String,
    pub per_page: u32,
}

impl Default for MatchQuery {
    fn default() -> Self {
        Self {
            sort: "begin_at".to_string(),
            per_page: 20,
        }
    }
}

/// Query for a single page of teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamQuery {
    pub per_page: u32,
}

impl Default for TeamQuery {
    fn default() -> Self {
        Self { per_page: 50 }
    }
}

/// Client for the match/team provider
#[async_trait]
pub trait EsportsClient: Send + Sync {
    /// Fetch one page of upcoming matches for a game
    async fn fetch_matches(&self, game: Game, query: &MatchQuery)
        -> Result<Vec<Match>, FetchError>;

    /// Fetch one page of teams for a game
    async fn fetch_teams(&self, game: Game, query: &TeamQuery) -> Result<Vec<Team>, FetchError>;
}
