//! Esports service
//!
//! Upcoming matches and team rosters come from the provider on every call;
//! completed matches and featured teams come from the seed catalog.

use std::sync::Arc;

use crate::app::seed::SeedCatalog;
use crate::domain::entities::{Game, Match, Team};
use crate::domain::ports::{EsportsClient, MatchQuery, TeamQuery};

/// Service for match and team listings
pub struct EsportsService<EC>
where
    EC: EsportsClient,
{
    client: Arc<EC>,
    seeds: Arc<SeedCatalog>,
}

impl<EC> EsportsService<EC>
where
    EC: EsportsClient,
{
    pub fn new(client: Arc<EC>, seeds: Arc<SeedCatalog>) -> Self {
        Self { client, seeds }
    }

    /// One page of upcoming matches, empty if the provider failed
    pub async fn upcoming_matches(&self, game: Game, query: &MatchQuery) -> Vec<Match> {
        match self.client.fetch_matches(game, query).await {
            Ok(matches) => matches,
            Err(e) => {
                tracing::warn!(%game, error = %e, "Upcoming matches unavailable");
                Vec::new()
            }
        }
    }

    /// One page of teams, empty if the provider failed
    pub async fn teams(&self, game: Game, query: &TeamQuery) -> Vec<Team> {
        match self.client.fetch_teams(game, query).await {
            Ok(teams) => teams,
            Err(e) => {
                tracing::warn!(%game, error = %e, "Teams unavailable");
                Vec::new()
            }
        }
    }

    pub fn completed_matches(&self, game: Game) -> Vec<Match> {
        self.seeds.completed_matches(game).to_vec()
    }

    pub fn featured_teams(&self, game: Game) -> Vec<Team> {
        self.seeds.featured_teams(game).to_vec()
    }
}
