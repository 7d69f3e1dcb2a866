//! Opaque blob store and typed repositories
//!
//! Persistence is a key-value blob store holding whole JSON collections.
//! Every write is a full replace and emits a change notification observable
//! by all subscribers in the same runtime; the synchronization loop listens
//! on that channel and falls back to polling for writers outside it.

pub mod file;
pub mod memory;
pub mod repositories;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use repositories::{PostRepository, SessionRepository, UserRepository};

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::error::AppResult;

/// Key-value blob store with change notification.
///
/// Readers fail soft: a missing key is `Ok(None)`, never an error. Writers
/// replace the whole value and broadcast the written key.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Read the raw value for a key, if present
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value for a key and notify subscribers
    async fn write(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key and notify subscribers
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Subscribe to change notifications (the written/removed key)
    fn subscribe(&self) -> broadcast::Receiver<String>;
}
