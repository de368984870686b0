//! Forum store for a single game
//!
//! Holds the seeded topics, the persisted user-created topics and the flat
//! persisted reply list. Every mutation builds the new collection, persists it
//! in full, and only then swaps it in. The merged topic list
//! (user-created ++ seeded) is republished on a watch channel after each change.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;

use crate::domain::entities::{ForumReply, ForumTopic, Game, TopicOrigin};
use crate::domain::ports::{custom_topics_key, replies_key, KeyValueStore};
use crate::error::StorageError;

/// Result of adding a reply
#[derive(Debug, Clone, Serialize)]
pub struct ReplyOutcome {
    pub reply: ForumReply,
    /// Parent topic after its counter was bumped, if it exists
    pub topic: Option<ForumTopic>,
    pub origin: Option<TopicOrigin>,
}

pub struct ForumStore<S>
where
    S: KeyValueStore,
{
    game: Game,
    storage: Arc<S>,
    seeded: Vec<ForumTopic>,
    /// Newest first
    custom: Vec<ForumTopic>,
    replies: Vec<ForumReply>,
    topics_tx: watch::Sender<Vec<ForumTopic>>,
}

impl<S> ForumStore<S>
where
    S: KeyValueStore,
{
    /// Load the persisted collections of a game.
    ///
    /// Unreadable or undecodable collections load as empty.
    pub async fn load(game: Game, storage: Arc<S>, seeded: Vec<ForumTopic>) -> Self {
        let custom: Vec<ForumTopic> =
            load_collection(storage.as_ref(), &custom_topics_key(game)).await;
        let replies: Vec<ForumReply> = load_collection(storage.as_ref(), &replies_key(game)).await;

        tracing::debug!(
            %game,
            custom_topics = custom.len(),
            replies = replies.len(),
            "Loaded forum"
        );

        let (topics_tx, _) = watch::channel(merge(&custom, &seeded));

        Self {
            game,
            storage,
            seeded,
            custom,
            replies,
            topics_tx,
        }
    }

    /// User-created topics (newest first) followed by seeded topics
    pub fn list_topics(&self) -> Vec<ForumTopic> {
        self.topics_tx.borrow().clone()
    }

    /// Find a topic, user-created first
    pub fn topic(&self, topic_id: &str) -> Option<(TopicOrigin, ForumTopic)> {
        self.custom
            .iter()
            .find(|t| t.id == topic_id)
            .map(|t| (TopicOrigin::UserCreated, t.clone()))
            .or_else(|| {
                self.seeded
                    .iter()
                    .find(|t| t.id == topic_id)
                    .map(|t| (TopicOrigin::Seeded, t.clone()))
            })
    }

    /// Create a topic at the front of the user-created list.
    ///
    /// The caller is responsible for validating the title.
    pub async fn create_topic(
        &mut self,
        title: &str,
        author: &str,
    ) -> Result<ForumTopic, StorageError> {
        let topic = ForumTopic::new(title, author);

        let mut custom = Vec::with_capacity(self.custom.len() + 1);
        custom.push(topic.clone());
        custom.extend(self.custom.iter().cloned());

        self.persist(&custom_topics_key(self.game), &custom).await?;
        self.custom = custom;
        self.publish();

        tracing::info!(game = %self.game, topic_id = %topic.id, "Topic created");
        Ok(topic)
    }

    /// Replies of a topic, oldest first
    pub fn list_replies(&self, topic_id: &str) -> Vec<ForumReply> {
        let mut replies: Vec<ForumReply> = self
            .replies
            .iter()
            .filter(|r| r.topic_id == topic_id)
            .cloned()
            .collect();
        // Stable: replies with equal timestamps keep insertion order
        replies.sort_by_key(|r| r.created_at);
        replies
    }

    /// Append a reply and bump the parent topic's counter.
    ///
    /// The reply is persisted even when no topic matches. Seeded topics only
    /// get their counter bumped in memory.
    pub async fn add_reply(
        &mut self,
        topic_id: &str,
        text: &str,
        author: &str,
    ) -> Result<ReplyOutcome, StorageError> {
        let reply = ForumReply::new(topic_id, author, text);

        let mut replies = self.replies.clone();
        replies.push(reply.clone());
        self.persist(&replies_key(self.game), &replies).await?;
        self.replies = replies;

        let (origin, topic) = if let Some(pos) = self.custom.iter().position(|t| t.id == topic_id)
        {
            let mut custom = self.custom.clone();
            custom[pos] = custom[pos].with_reply_added();

            if let Err(e) = self.persist(&custom_topics_key(self.game), &custom).await {
                tracing::warn!(
                    game = %self.game,
                    topic_id,
                    error = %e,
                    "Reply saved but reply counter was not persisted"
                );
                self.publish();
                return Err(e);
            }

            let topic = custom[pos].clone();
            self.custom = custom;
            (Some(TopicOrigin::UserCreated), Some(topic))
        } else if let Some(pos) = self.seeded.iter().position(|t| t.id == topic_id) {
            self.seeded[pos] = self.seeded[pos].with_reply_added();
            (Some(TopicOrigin::Seeded), Some(self.seeded[pos].clone()))
        } else {
            tracing::debug!(game = %self.game, topic_id, "Reply to unknown topic");
            (None, None)
        };

        self.publish();
        Ok(ReplyOutcome {
            reply,
            topic,
            origin,
        })
    }

    /// Receive the merged topic list after every change
    pub fn subscribe(&self) -> watch::Receiver<Vec<ForumTopic>> {
        self.topics_tx.subscribe()
    }

    fn publish(&self) {
        self.topics_tx.send_replace(merge(&self.custom, &self.seeded));
    }

    async fn persist<T: Serialize>(&self, key: &str, value: &[T]) -> Result<(), StorageError> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, &json).await
    }
}

fn merge(custom: &[ForumTopic], seeded: &[ForumTopic]) -> Vec<ForumTopic> {
    custom.iter().chain(seeded.iter()).cloned().collect()
}

async fn load_collection<S, T>(storage: &S, key: &str) -> Vec<T>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match storage.get(key).await {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Stored collection is unreadable, starting empty");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to read stored collection, starting empty");
            Vec::new()
        }
    }
}
