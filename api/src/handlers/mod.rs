//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod esports;
pub mod forum;
pub mod news;

pub use esports::{featured_teams, list_teams, recent_matches, upcoming_matches};
pub use forum::{add_reply, create_topic, get_topic, list_replies, list_topics};
pub use news::{get_game_news, get_headlines};

use axum::http::{header, HeaderMap};

use crate::domain::entities::Game;
use crate::error::AppError;

/// Parse the `:game` path segment
fn parse_game(slug: &str) -> Result<Game, AppError> {
    slug.parse().map_err(AppError::BadRequest)
}

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn parse_game_accepts_any_slug() {
        assert_eq!(parse_game("ow").unwrap(), Game::Overwatch);
        assert_eq!(parse_game("valorant").unwrap(), Game::Valorant);
        assert_eq!(parse_game("rocketleague").unwrap(), Game::RocketLeague);
    }

    #[test]
    fn parse_game_rejects_unknown() {
        assert!(matches!(parse_game("dota2"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn wants_json_from_accept_header() {
        let mut headers = HeaderMap::new();
        assert!(!wants_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/plain"));
        assert!(!wants_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain;q=0.5"),
        );
        assert!(wants_json(&headers));
    }
}
