//! News handlers
//!
//! Per-game news and the interleaved headline rotation.
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{parse_game, wants_json};
use crate::app::Headlines;
use crate::domain::entities::NewsArticle;
use crate::error::AppError;
use crate::render::render_headlines;
use crate::AppState;

/// Query parameters for GET /news/headlines
#[derive(Debug, Default, Deserialize)]
pub struct HeadlinesParams {
    /// Rotation tick selecting the current headline
    #[serde(default)]
    pub tick: usize,
}

/// JSON response for the headline rotation
#[derive(Debug, Serialize)]
pub struct HeadlinesResponse {
    #[serde(flatten)]
    pub headlines: Headlines,
    pub tick: usize,
    pub current: Option<NewsArticle>,
}

/// GET /news/headlines
///
/// Fetches every game's news and interleaves the most recent items.
/// - Accept: application/json → JSON response
/// - Otherwise → Plain text
pub async fn get_headlines(
    State(state): State<AppState>,
    Query(params): Query<HeadlinesParams>,
    headers: HeaderMap,
) -> Response {
    let headlines = state.news_service.headlines().await;

    if wants_json(&headers) {
        let current = headlines.at(params.tick).cloned();
        Json(HeadlinesResponse {
            headlines,
            tick: params.tick,
            current,
        })
        .into_response()
    } else {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_headlines(&headlines, params.tick),
        )
            .into_response()
    }
}

/// GET /games/:game/news
pub async fn get_game_news(
    State(state): State<AppState>,
    Path(game): Path<String>,
) -> Result<Json<Vec<NewsArticle>>, AppError> {
    let game = parse_game(&game)?;
    Ok(Json(state.news_service.latest(game).await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Game;
    use crate::test_utils::test_feed;

    #[test]
    fn parse_params_default_tick() {
        let params: HeadlinesParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.tick, 0);
    }

    #[test]
    fn serialize_rotating_response() {
        let headlines = Headlines::from_articles(test_feed(Game::Valorant, 2));
        let current = headlines.at(3).cloned();
        let response = HeadlinesResponse {
            headlines,
            tick: 3,
            current,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["state"], "rotating");
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
        assert_eq!(json["current"]["title"], "val-1");
    }

    #[test]
    fn serialize_no_news_response() {
        let response = HeadlinesResponse {
            headlines: Headlines::NoNews,
            tick: 0,
            current: None,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["state"], "no_news");
        assert!(json["current"].is_null());
    }
}
