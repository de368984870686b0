//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Game, Match, NewsArticle, Team};
use crate::domain::ports::{EsportsClient, KeyValueStore, MatchQuery, NewsClient, TeamQuery};
use crate::error::{FetchError, StorageError};

/// Rebuild a configured error for each call.
///
/// Transport errors cannot be constructed by hand, so mocks never hold one.
fn replay(error: &FetchError) -> FetchError {
    match error {
        FetchError::InvalidUrl(msg) => FetchError::InvalidUrl(msg.clone()),
        FetchError::BadStatus { status, message } => FetchError::BadStatus {
            status: *status,
            message: message.clone(),
        },
        FetchError::Decode(msg) => FetchError::Decode(msg.clone()),
        FetchError::Transport(e) => FetchError::Decode(e.to_string()),
    }
}

// ============================================================================
// In-Memory Key-Value Store
// ============================================================================

#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<RwLock<HashMap<String, usize>>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key for testing
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Every read fails with an I/O error
    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    /// Toggle write failures at any point of a test
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.read().unwrap().get(key).cloned()
    }

    /// Number of successful writes to a key
    pub fn writes(&self, key: &str) -> usize {
        self.writes.read().unwrap().get(key).copied().unwrap_or(0)
    }

    fn injected_failure(message: &str) -> StorageError {
        StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, message.to_string()))
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("injected read failure"));
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::injected_failure("injected write failure"));
        }
        self.values
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self
            .writes
            .write()
            .unwrap()
            .entry(key.to_string())
            .or_insert(0) += 1;
        Ok(())
    }
}

// ============================================================================
// Mock News Client
// ============================================================================

#[derive(Default)]
pub struct MockNewsClient {
    articles: HashMap<Game, Vec<NewsArticle>>,
    errors: HashMap<Game, FetchError>,
    calls: Arc<RwLock<Vec<Game>>>,
}

impl MockNewsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(mut self, game: Game, articles: Vec<NewsArticle>) -> Self {
        self.articles.insert(game, articles);
        self
    }

    pub fn with_error(mut self, game: Game, error: FetchError) -> Self {
        self.errors.insert(game, error);
        self
    }

    /// Games fetched so far, in call order
    pub fn calls(&self) -> Vec<Game> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl NewsClient for MockNewsClient {
    async fn fetch_news(&self, game: Game) -> Result<Vec<NewsArticle>, FetchError> {
        self.calls.write().unwrap().push(game);
        if let Some(error) = self.errors.get(&game) {
            return Err(replay(error));
        }
        Ok(self.articles.get(&game).cloned().unwrap_or_default())
    }
}

// ============================================================================
// Mock Esports Client
// ============================================================================

#[derive(Default)]
pub struct MockEsportsClient {
    matches: HashMap<Game, Vec<Match>>,
    teams: HashMap<Game, Vec<Team>>,
    error: Option<FetchError>,
    match_queries: Arc<RwLock<Vec<MatchQuery>>>,
    team_queries: Arc<RwLock<Vec<TeamQuery>>>,
}

impl MockEsportsClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matches(mut self, game: Game, matches: Vec<Match>) -> Self {
        self.matches.insert(game, matches);
        self
    }

    pub fn with_teams(mut self, game: Game, teams: Vec<Team>) -> Self {
        self.teams.insert(game, teams);
        self
    }

    /// Every call fails with this error
    pub fn with_error(mut self, error: FetchError) -> Self {
        self.error = Some(error);
        self
    }

    pub fn match_queries(&self) -> Vec<MatchQuery> {
        self.match_queries.read().unwrap().clone()
    }

    pub fn team_page_sizes(&self) -> Vec<u32> {
        self.team_queries
            .read()
            .unwrap()
            .iter()
            .map(|q| q.per_page)
            .collect()
    }
}

#[async_trait]
impl EsportsClient for MockEsportsClient {
    async fn fetch_matches(
        &self,
        game: Game,
        query: &MatchQuery,
    ) -> Result<Vec<Match>, FetchError> {
        self.match_queries.write().unwrap().push(query.clone());
        if let Some(error) = &self.error {
            return Err(replay(error));
        }
        Ok(self.matches.get(&game).cloned().unwrap_or_default())
    }

    async fn fetch_teams(&self, game: Game, query: &TeamQuery) -> Result<Vec<Team>, FetchError> {
        self.team_queries.write().unwrap().push(query.clone());
        if let Some(error) = &self.error {
            return Err(replay(error));
        }
        Ok(self.teams.get(&game).cloned().unwrap_or_default())
    }
}
