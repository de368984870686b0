//! File-backed key-value store
//!
//! One `{key}.json` file per key under a data directory. Writes go to a
//! temporary file first and are renamed into place so a crash mid-write never
//! leaves a truncated document behind.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ports::KeyValueStore;
use crate::error::StorageError;

/// Key-value store persisting each key to its own file
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub async fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants, but never let one escape the directory
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");

        tokio::fs::write(&tmp, value).await?;
        tokio::fs::rename(&tmp, &path).await?;
        tracing::trace!(key, bytes = value.len(), "Persisted key");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).await.unwrap();

        assert!(store.get("forum_replies_valorant").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = FileKeyValueStore::open(dir.path()).await.unwrap();
            store
                .set("custom_forum_topics_overwatch", "[1,2,3]")
                .await
                .unwrap();
        }

        let reopened = FileKeyValueStore::open(dir.path()).await.unwrap();
        assert_eq!(
            reopened
                .get("custom_forum_topics_overwatch")
                .await
                .unwrap()
                .as_deref(),
            Some("[1,2,3]")
        );
    }

    #[tokio::test]
    async fn set_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).await.unwrap();

        store.set("k", "first").await.unwrap();
        store.set("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
        assert!(!dir.path().join("k.json.tmp").exists());
    }

    #[tokio::test]
    async fn keys_cannot_escape_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("data")).await.unwrap();

        store.set("../escape", "x").await.unwrap();

        assert!(!dir.path().join("escape.json").exists());
        assert_eq!(store.get("../escape").await.unwrap().as_deref(), Some("x"));
    }
}
