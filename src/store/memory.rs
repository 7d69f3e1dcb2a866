//! In-memory blob store used by tests

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{RwLock, broadcast};

use crate::error::AppResult;
use crate::store::BlobStore;

/// HashMap-backed store with the same notification semantics as [`super::FileStore`]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
    changes: broadcast::Sender<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            map: RwLock::new(HashMap::new()),
            changes,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.map.read().await.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.map
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        let _ = self.changes.send(key.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.map.write().await.remove(key);
        let _ = self.changes.send(key.to_string());
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<String> {
        self.changes.subscribe()
    }
}
