//! Forum domain entities
//!
//! Topics and replies are immutable values. A reply counter change produces a
//! new `ForumTopic` that replaces the old one in its list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a forum reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplyId(pub Uuid);

impl ReplyId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ReplyId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ReplyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A forum topic, either seeded or user-created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumTopic {
    pub id: String,
    pub title: String,
    pub author: String,
    /// Incremented on every reply, never recomputed from the reply set
    #[serde(alias = "replies")]
    pub reply_count: u32,
}

impl ForumTopic {
    /// A fresh user-created topic with a client-generated id
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            reply_count: 0,
        }
    }

    /// Copy of this topic with one more reply counted
    pub fn with_reply_added(&self) -> Self {
        Self {
            reply_count: self.reply_count.saturating_add(1),
            ..self.clone()
        }
    }
}

/// A reply to a forum topic. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForumReply {
    pub id: ReplyId,
    pub topic_id: String,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ForumReply {
    pub fn new(topic_id: &str, author: &str, text: &str) -> Self {
        Self {
            id: ReplyId::new(),
            topic_id: topic_id.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Where a topic lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicOrigin {
    /// Shipped with the seed bundle, never persisted
    Seeded,
    /// Created by a user, persisted per game
    UserCreated,
}
