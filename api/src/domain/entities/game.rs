//! Game domain entity
//!
//! Every per-game pipeline (news, matches, teams, forums) is parameterized by
//! this enum instead of being copied once per game.

use serde::{Deserialize, Serialize};

/// A supported game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Game {
    Overwatch,
    Valorant,
    RocketLeague,
}

impl Game {
    /// All games in the fixed order used by the news interleaver
    pub const ALL: [Game; 3] = [Game::Overwatch, Game::Valorant, Game::RocketLeague];

    /// Slug used by the news scraper (`{slug}_news`)
    pub fn news_slug(&self) -> &'static str {
        match self {
            Game::Overwatch => "ow",
            Game::Valorant => "val",
            Game::RocketLeague => "rl",
        }
    }

    /// Videogame slug on Pandascore
    pub fn provider_slug(&self) -> &'static str {
        match self {
            Game::Overwatch => "ow",
            Game::Valorant => "valorant",
            Game::RocketLeague => "rl",
        }
    }

    /// Slug used for storage keys, seed bundles and routes
    pub fn storage_slug(&self) -> &'static str {
        match self {
            Game::Overwatch => "overwatch",
            Game::Valorant => "valorant",
            Game::RocketLeague => "rocketleague",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Game::Overwatch => "Overwatch 2",
            Game::Valorant => "Valorant",
            Game::RocketLeague => "Rocket League",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_slug())
    }
}

impl std::str::FromStr for Game {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Game::ALL
            .into_iter()
            .find(|game| {
                lower == game.storage_slug()
                    || lower == game.news_slug()
                    || lower == game.provider_slug()
            })
            .or(match lower.as_str() {
                "overwatch2" | "overwatch_2" => Some(Game::Overwatch),
                "rocket_league" | "rocket-league" => Some(Game::RocketLeague),
                _ => None,
            })
            .ok_or_else(|| format!("Unknown game: {}", s))
    }
}
