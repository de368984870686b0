//! Configuration loaded from the environment (and `.env` via dotenvy)

use std::env;
use std::path::PathBuf;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the self-hosted news scraper (`{base}/{slug}_news`)
    pub news_api_url: String,
    pub pandascore_url: String,
    /// Bearer token for Pandascore. Empty means unauthenticated requests.
    pub pandascore_token: String,
    /// Directory holding the forum key-value files
    pub data_dir: PathBuf,
    /// Per-IP rate limiting on forum write routes
    pub forum_rate_limit: bool,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            news_api_url: env::var("NEWS_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:5000/api".to_string()),
            pandascore_url: env::var("PANDASCORE_URL")
                .unwrap_or_else(|_| "https://api.pandascore.co".to_string()),
            pandascore_token: env::var("PANDASCORE_TOKEN").unwrap_or_default(),
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            forum_rate_limit: env::var("FORUM_RATE_LIMIT")
                .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "off"))
                .unwrap_or(true),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Check if a Pandascore token is configured
    pub fn pandascore_authenticated(&self) -> bool {
        !self.pandascore_token.is_empty()
    }
}
