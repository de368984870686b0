//! Forum service
//!
//! One `ForumStore` per game, each behind its own lock so that mutations of
//! a game's forum are serialized. Input validation lives here, not in the
//! stores.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Mutex};

use crate::app::forum_store::{ForumStore, ReplyOutcome};
use crate::app::seed::SeedCatalog;
use crate::domain::entities::{ForumReply, ForumTopic, Game, Identity, TopicOrigin};
use crate::domain::ports::KeyValueStore;
use crate::error::DomainError;

/// A topic with its replies, read in one consistent snapshot
#[derive(Debug, Clone, Serialize)]
pub struct TopicDetail {
    pub topic: ForumTopic,
    pub origin: TopicOrigin,
    pub replies: Vec<ForumReply>,
}

/// Service for forum topics and replies
pub struct ForumService<S>
where
    S: KeyValueStore,
{
    overwatch: Mutex<ForumStore<S>>,
    valorant: Mutex<ForumStore<S>>,
    rocket_league: Mutex<ForumStore<S>>,
}

impl<S> ForumService<S>
where
    S: KeyValueStore,
{
    /// Load every game's forum from storage once
    pub async fn load(storage: Arc<S>, seeds: &SeedCatalog) -> Self {
        let load = |game: Game| {
            ForumStore::load(game, storage.clone(), seeds.forum_topics(game).to_vec())
        };

        let (overwatch, valorant, rocket_league) = tokio::join!(
            load(Game::Overwatch),
            load(Game::Valorant),
            load(Game::RocketLeague),
        );

        Self {
            overwatch: Mutex::new(overwatch),
            valorant: Mutex::new(valorant),
            rocket_league: Mutex::new(rocket_league),
        }
    }

    fn store(&self, game: Game) -> &Mutex<ForumStore<S>> {
        match game {
            Game::Overwatch => &self.overwatch,
            Game::Valorant => &self.valorant,
            Game::RocketLeague => &self.rocket_league,
        }
    }

    pub async fn list_topics(&self, game: Game) -> Vec<ForumTopic> {
        self.store(game).lock().await.list_topics()
    }

    /// Get a topic, where it lives and its replies under a single lock
    pub async fn topic_detail(
        &self,
        game: Game,
        topic_id: &str,
    ) -> Result<TopicDetail, DomainError> {
        let store = self.store(game).lock().await;
        let (origin, topic) = store
            .topic(topic_id)
            .ok_or_else(|| DomainError::NotFound(format!("Topic {} not found", topic_id)))?;

        Ok(TopicDetail {
            topic,
            origin,
            replies: store.list_replies(topic_id),
        })
    }

    /// Create a topic authored by `identity`
    pub async fn create_topic(
        &self,
        game: Game,
        title: &str,
        identity: &Identity,
    ) -> Result<ForumTopic, DomainError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::Validation(
                "Topic title cannot be empty".to_string(),
            ));
        }

        let topic = self
            .store(game)
            .lock()
            .await
            .create_topic(title, identity.author_name())
            .await?;
        Ok(topic)
    }

    pub async fn list_replies(&self, game: Game, topic_id: &str) -> Vec<ForumReply> {
        self.store(game).lock().await.list_replies(topic_id)
    }

    /// Reply to a topic as `identity`
    pub async fn add_reply(
        &self,
        game: Game,
        topic_id: &str,
        text: &str,
        identity: &Identity,
    ) -> Result<ReplyOutcome, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::Validation(
                "Reply text cannot be empty".to_string(),
            ));
        }

        let outcome = self
            .store(game)
            .lock()
            .await
            .add_reply(topic_id, text, identity.author_name())
            .await?;
        Ok(outcome)
    }

    /// Watch the merged topic list of a game
    pub async fn subscribe(&self, game: Game) -> watch::Receiver<Vec<ForumTopic>> {
        self.store(game).lock().await.subscribe()
    }
}
