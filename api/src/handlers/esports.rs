//! Esports handlers
//!
//! Upcoming matches and teams from the provider, completed matches and
//! featured teams from the seed catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use super::parse_game;
use crate::domain::entities::{Match, Team};
use crate::domain::ports::{MatchQuery, TeamQuery};
use crate::error::AppError;
use crate::AppState;

/// Largest page the provider serves
const MAX_PER_PAGE: u32 = 100;

/// Query parameters for GET /games/:game/matches/upcoming
#[derive(Debug, Default, Deserialize)]
pub struct MatchParams {
    pub sort: Option<String>,
    pub per_page: Option<u32>,
}

impl MatchParams {
    fn into_query(self) -> MatchQuery {
        let defaults = MatchQuery::default();
        MatchQuery {
            sort: self.sort.unwrap_or(defaults.sort),
            per_page: self
                .per_page
                .unwrap_or(defaults.per_page)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

/// Query parameters for GET /games/:game/teams
#[derive(Debug, Default, Deserialize)]
pub struct TeamParams {
    pub per_page: Option<u32>,
}

impl TeamParams {
    fn into_query(self) -> TeamQuery {
        TeamQuery {
            per_page: self
                .per_page
                .unwrap_or(TeamQuery::default().per_page)
                .clamp(1, MAX_PER_PAGE),
        }
    }
}

/// GET /games/:game/matches/upcoming
pub async fn upcoming_matches(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Query(params): Query<MatchParams>,
) -> Result<Json<Vec<Match>>, AppError> {
    let game = parse_game(&game)?;
    let matches = state
        .esports_service
        .upcoming_matches(game, &params.into_query())
        .await;
    Ok(Json(matches))
}

/// GET /games/:game/matches/recent
pub async fn recent_matches(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> Result<Json<Vec<Match>>, AppError> {
    let game = parse_game(&game)?;
    Ok(Json(state.esports_service.completed_matches(game)))
}

/// GET /games/:game/teams
pub async fn list_teams(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Query(params): Query<TeamParams>,
) -> Result<Json<Vec<Team>>, AppError> {
    let game = parse_game(&game)?;
    let teams = state
        .esports_service
        .teams(game, &params.into_query())
        .await;
    Ok(Json(teams))
}

/// GET /games/:game/teams/featured
pub async fn featured_teams(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> Result<Json<Vec<Team>>, AppError> {
    let game = parse_game(&game)?;
    Ok(Json(state.esports_service.featured_teams(game)))
}
