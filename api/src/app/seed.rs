//! Seed catalog
//!
//! Completed matches, featured teams and seeded forum topics ship with the
//! binary as one JSON bundle per game and are decoded once at startup.

use serde::Deserialize;

use crate::domain::entities::{ForumTopic, Game, Match, Team};
use crate::error::DomainError;

const OVERWATCH_SEED: &str = include_str!("../../seed/overwatch.json");
const VALORANT_SEED: &str = include_str!("../../seed/valorant.json");
const ROCKET_LEAGUE_SEED: &str = include_str!("../../seed/rocketleague.json");

/// Static data for one game
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameSeed {
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub forum_topics: Vec<ForumTopic>,
}

impl GameSeed {
    fn decode(game: Game, json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::Internal(format!("Seed bundle for {} is invalid: {}", game, e))
        })
    }
}

/// Static data for every game
#[derive(Debug, Clone, Default)]
pub struct SeedCatalog {
    overwatch: GameSeed,
    valorant: GameSeed,
    rocket_league: GameSeed,
}

impl SeedCatalog {
    /// Decode the bundles compiled into the binary
    pub fn bundled() -> Result<Self, DomainError> {
        Ok(Self {
            overwatch: GameSeed::decode(Game::Overwatch, OVERWATCH_SEED)?,
            valorant: GameSeed::decode(Game::Valorant, VALORANT_SEED)?,
            rocket_league: GameSeed::decode(Game::RocketLeague, ROCKET_LEAGUE_SEED)?,
        })
    }

    /// Replace the seed of one game
    #[cfg(test)]
    pub fn with_game(mut self, game: Game, seed: GameSeed) -> Self {
        *self.seed_mut(game) = seed;
        self
    }

    pub fn seed(&self, game: Game) -> &GameSeed {
        match game {
            Game::Overwatch => &self.overwatch,
            Game::Valorant => &self.valorant,
            Game::RocketLeague => &self.rocket_league,
        }
    }

    #[cfg(test)]
    fn seed_mut(&mut self, game: Game) -> &mut GameSeed {
        match game {
            Game::Overwatch => &mut self.overwatch,
            Game::Valorant => &mut self.valorant,
            Game::RocketLeague => &mut self.rocket_league,
        }
    }

    pub fn completed_matches(&self, game: Game) -> &[Match] {
        &self.seed(game).matches
    }

    pub fn featured_teams(&self, game: Game) -> &[Team] {
        &self.seed(game).teams
    }

    pub fn forum_topics(&self, game: Game) -> &[ForumTopic] {
        &self.seed(game).forum_topics
    }
}
