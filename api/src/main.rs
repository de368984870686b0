//! eClips API Server
//!
//! Esports companion backend: news headlines, match and team listings, and
//! per-game community forums.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::{FileKeyValueStore, HttpNewsClient, PandascoreClient};
use app::{EsportsService, ForumService, NewsService, SeedCatalog};
use config::Config;
use domain::entities::Game;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub news_service: Arc<NewsService<HttpNewsClient>>,
    pub esports_service: Arc<EsportsService<PandascoreClient>>,
    pub forum_service: Arc<ForumService<FileKeyValueStore>>,
    pub config: Config,
}

impl AppState {
    /// Wire adapters and services, loading every forum from the data directory
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let seeds = Arc::new(SeedCatalog::bundled().context("Failed to decode seed bundle")?);

        let storage = Arc::new(
            FileKeyValueStore::open(&config.data_dir)
                .await
                .with_context(|| {
                    format!("Failed to open data directory {}", config.data_dir.display())
                })?,
        );

        let news_client = Arc::new(HttpNewsClient::new(config.news_api_url.clone()));
        let esports_client = Arc::new(PandascoreClient::new(
            config.pandascore_url.clone(),
            config.pandascore_token.clone(),
        ));

        let forum_service = Arc::new(ForumService::load(storage, &seeds).await);

        Ok(Self {
            news_service: Arc::new(NewsService::new(news_client)),
            esports_service: Arc::new(EsportsService::new(esports_client, seeds)),
            forum_service,
            config,
        })
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the router with every route and middleware
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let forum_writes = Router::new()
        .route("/games/:game/forum/topics", post(handlers::create_topic))
        .route(
            "/games/:game/forum/topics/:topic_id/replies",
            post(handlers::add_reply),
        );

    // 2 req/sec sustained, burst of 5, keyed by peer IP from the socket
    let forum_writes = if state.config.forum_rate_limit {
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .key_extractor(PeerIpKeyExtractor)
                .per_second(2)
                .burst_size(5)
                .finish()
                .context("Failed to build governor config")?,
        );
        forum_writes.layer(GovernorLayer {
            config: governor_config,
        })
    } else {
        forum_writes
    };

    let app = Router::new()
        .route("/health", get(health))
        // News
        .route("/news/headlines", get(handlers::get_headlines))
        .route("/games/:game/news", get(handlers::get_game_news))
        // Matches and teams
        .route(
            "/games/:game/matches/upcoming",
            get(handlers::upcoming_matches),
        )
        .route("/games/:game/matches/recent", get(handlers::recent_matches))
        .route("/games/:game/teams", get(handlers::list_teams))
        .route("/games/:game/teams/featured", get(handlers::featured_teams))
        // Forum reads
        .route("/games/:game/forum/topics", get(handlers::list_topics))
        .route(
            "/games/:game/forum/topics/:topic_id",
            get(handlers::get_topic),
        )
        .route(
            "/games/:game/forum/topics/:topic_id/replies",
            get(handlers::list_replies),
        )
        .merge(forum_writes)
        // Middleware
        .layer(middleware::from_fn(auth::identity_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Log every republished topic list
async fn spawn_forum_watchers(state: &AppState) {
    for game in Game::ALL {
        let mut topics = state.forum_service.subscribe(game).await;
        tokio::spawn(async move {
            while topics.changed().await.is_ok() {
                let count = topics.borrow_and_update().len();
                tracing::debug!(%game, topics = count, "Forum topics changed");
            }
        });
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,eclips_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting eClips API...");

    // Load configuration
    let config = Config::from_env();
    if !config.pandascore_authenticated() {
        tracing::warn!("PANDASCORE_TOKEN is not set, provider requests are unauthenticated");
    }
    tracing::info!(
        news_api = %config.news_api_url,
        data_dir = %config.data_dir.display(),
        rate_limit = config.forum_rate_limit,
        "Configuration loaded"
    );

    let port = config.port;
    let state = AppState::from_config(config).await?;
    spawn_forum_watchers(&state).await;

    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
