//! Match and team entities
//!
//! Read-only records, either bundled seed data or fetched from Pandascore.

use serde::{Deserialize, Serialize};

/// A single match between two teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub tournament_name: String,
    pub team1_name: String,
    pub team2_name: String,
    pub team1_score: u32,
    pub team2_score: u32,
    /// Display string, never parsed
    pub date: String,
}

/// A team roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub region: String,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}
