//! File-backed blob store
//!
//! One JSON file per key under a data directory. This is the production
//! stand-in for a real database: durable enough for a single operator
//! console, and trivially inspectable.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::broadcast;

use crate::error::{AppError, AppResult};
use crate::store::BlobStore;

/// Capacity of the change-notification channel. Lagging subscribers simply
/// reconcile on their next poll tick, so a small buffer is enough.
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Blob store persisting each key as `<data_dir>/<key>.json`
pub struct FileStore {
    data_dir: PathBuf,
    changes: broadcast::Sender<String>,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, creating the directory if needed
    pub async fn open(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| AppError::Store(format!("cannot create data dir: {e}")))?;
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Ok(Self { data_dir, changes })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are internal constants, not user input, but keep them from
        // escaping the data directory anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
            .collect();
        Path::new(&self.data_dir).join(format!("{safe}.json"))
    }

    fn notify(&self, key: &str) {
        // A send error only means no subscriber is currently listening.
        let _ = self.changes.send(key.to_string());
    }
}

#[async_trait]
impl BlobStore for FileStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Store(format!("read {key}: {e}"))),
        }
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| AppError::Store(format!("write {key}: {e}")))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| AppError::Store(format!("write {key}: {e}")))?;
        self.notify(key);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(AppError::Store(format!("remove {key}: {e}"))),
        }
        self.notify(key);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<String> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        assert!(store.read("postmaster_users").await.unwrap().is_none());

        store.write("postmaster_users", "[]").await.unwrap();
        assert_eq!(
            store.read("postmaster_users").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn write_notifies_subscribers() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        let mut rx = store.subscribe();

        store.write("postmaster_posts", "[]").await.unwrap();
        assert_eq!(rx.recv().await.unwrap(), "postmaster_posts");
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        store.write("postmaster_current_user", "{}").await.unwrap();
        store.remove("postmaster_current_user").await.unwrap();
        store.remove("postmaster_current_user").await.unwrap();
        assert!(
            store
                .read("postmaster_current_user")
                .await
                .unwrap()
                .is_none()
        );
    }
}
