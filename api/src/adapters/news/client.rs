//! News scraper client implementation
//!
//! The scraper exposes one endpoint per game at `{base}/{slug}_news` and wraps
//! its articles in a `{data: {status, segments: [...]}}` envelope.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use uuid::Uuid;

use crate::adapters::http::{deserialize_null_default, handle_response, parse_url};
use crate::domain::entities::{Game, NewsArticle};
use crate::domain::ports::NewsClient;
use crate::error::FetchError;

/// HTTP implementation of the news client
pub struct HttpNewsClient {
    http: Client,
    base_url: String,
}

impl HttpNewsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn news_url(&self, game: Game) -> String {
        format!("{}/{}_news", self.base_url, game.news_slug())
    }
}

/// Response envelope from the scraper
#[derive(Deserialize)]
struct NewsEnvelope {
    data: NewsData,
}

#[derive(Deserialize)]
struct NewsData {
    /// Status of the scraper's own upstream request
    status: Option<u16>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    segments: Vec<NewsSegment>,
}

#[derive(Deserialize)]
struct NewsSegment {
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    date: String,
    url_path: String,
    description: Option<String>,
}

impl NewsSegment {
    fn into_article(self, game: Game) -> NewsArticle {
        NewsArticle {
            id: Uuid::new_v4(),
            title: self.title,
            author: self.author,
            date: self.date,
            link: self.url_path,
            description: self.description,
            game,
        }
    }
}

#[async_trait]
impl NewsClient for HttpNewsClient {
    async fn fetch_news(&self, game: Game) -> Result<Vec<NewsArticle>, FetchError> {
        let url = parse_url(&self.news_url(game))?;
        tracing::debug!(%game, %url, "Fetching news");

        let resp = self.http.get(url).send().await?;
        let envelope: NewsEnvelope = handle_response(resp).await?;

        // The scraper answers 200 even when its own scrape failed
        if let Some(status) = envelope.data.status {
            if !(200..300).contains(&status) {
                return Err(FetchError::BadStatus {
                    status,
                    message: "scraper reported an upstream failure".to_string(),
                });
            }
        }

        Ok(envelope
            .data
            .segments
            .into_iter()
            .map(|segment| segment.into_article(game))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::spawn_upstream;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    fn envelope(segments: serde_json::Value) -> serde_json::Value {
        json!({ "data": { "status": 200, "segments": segments } })
    }

    #[test]
    fn news_url_uses_game_slug() {
        let client = HttpNewsClient::new("http://localhost:5000/api/".to_string());
        assert_eq!(
            client.news_url(Game::Overwatch),
            "http://localhost:5000/api/ow_news"
        );
        assert_eq!(
            client.news_url(Game::RocketLeague),
            "http://localhost:5000/api/rl_news"
        );
    }

    #[tokio::test]
    async fn fetch_news_decodes_segments_in_server_order() {
        let router = Router::new().route(
            "/val_news",
            get(|| async {
                Json(envelope(json!([
                    {
                        "title": "Patch 8.10 notes",
                        "author": "Riot Games",
                        "date": "Oct 28, 2025",
                        "url_path": "https://example.com/patch",
                        "description": "Viper changes"
                    },
                    {
                        "title": "Sentinels sign a coach",
                        "author": "VCT Wire",
                        "date": "Oct 25, 2025",
                        "url_path": "https://example.com/coach"
                    }
                ])))
            }),
        );
        let client = HttpNewsClient::new(spawn_upstream(router).await);

        let articles = client.fetch_news(Game::Valorant).await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Patch 8.10 notes");
        assert_eq!(articles[0].link, "https://example.com/patch");
        assert_eq!(articles[0].description.as_deref(), Some("Viper changes"));
        assert_eq!(articles[0].game, Game::Valorant);
        assert_eq!(articles[1].title, "Sentinels sign a coach");
        assert!(articles[1].description.is_none());
    }

    #[tokio::test]
    async fn fetch_news_reports_bad_status() {
        let router = Router::new().route(
            "/ow_news",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "scraper crashed") }),
        );
        let client = HttpNewsClient::new(spawn_upstream(router).await);

        let err = client.fetch_news(Game::Overwatch).await.unwrap_err();

        match err {
            FetchError::BadStatus { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "scraper crashed");
            }
            other => panic!("expected BadStatus, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_news_reports_scraper_failure_inside_envelope() {
        let router = Router::new().route(
            "/rl_news",
            get(|| async { Json(json!({ "data": { "status": 500, "segments": [] } })) }),
        );
        let client = HttpNewsClient::new(spawn_upstream(router).await);

        let err = client.fetch_news(Game::RocketLeague).await.unwrap_err();

        assert!(matches!(err, FetchError::BadStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn fetch_news_reports_decode_mismatch() {
        let router = Router::new().route(
            "/ow_news",
            get(|| async { Json(json!([{ "title": "bare array", "link": "x" }])) }),
        );
        let client = HttpNewsClient::new(spawn_upstream(router).await);

        let err = client.fetch_news(Game::Overwatch).await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn fetch_news_reports_transport_failure() {
        // Nothing listens on port 9 of localhost
        let client = HttpNewsClient::new("http://127.0.0.1:9".to_string());

        let err = client.fetch_news(Game::Overwatch).await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn fetch_news_reports_invalid_url() {
        let client = HttpNewsClient::new("not a url".to_string());

        let err = client.fetch_news(Game::Overwatch).await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
