//! Key-value storage port trait
//!
//! A simple string-keyed store holding JSON documents. The forum keeps one
//! key per game for custom topics and one for replies.

use async_trait::async_trait;

use crate::domain::entities::Game;
use crate::error::StorageError;

/// Storage key for the user-created topics of a game
pub fn custom_topics_key(game: Game) -> String {
    format!("custom_forum_topics_{}", game.storage_slug())
}

/// Storage key for the replies of a game
pub fn replies_key(game: Game) -> String {
    format!("forum_replies_{}", game.storage_slug())
}

/// Local key-value store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key, `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under a key
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
