//! Typed repositories over the blob store
//!
//! All reads are full-collection snapshots and all writes are full-collection
//! replaces; the later of two concurrent writers wins unconditionally. That
//! is a documented consistency limitation of the single-operator-console
//! usage pattern, not an accident.

use uuid::Uuid;

use crate::constants::store_keys;
use crate::error::AppResult;
use crate::models::{Post, User};
use crate::store::BlobStore;

/// Parse a persisted collection, degrading malformed payloads to an empty
/// collection instead of failing. A corrupt store reads as a fresh install.
fn parse_collection<T: serde::de::DeserializeOwned>(key: &str, raw: Option<String>) -> Vec<T> {
    match raw {
        None => Vec::new(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed collection payload, treating as empty");
                Vec::new()
            }
        },
    }
}

/// Repository for the Users collection
pub struct UserRepository;

impl UserRepository {
    /// Load the full Users collection
    pub async fn load_all(store: &dyn BlobStore) -> AppResult<Vec<User>> {
        let raw = store.read(store_keys::USERS).await?;
        Ok(parse_collection(store_keys::USERS, raw))
    }

    /// Replace the full Users collection
    pub async fn save_all(store: &dyn BlobStore, users: &[User]) -> AppResult<()> {
        let raw = serde_json::to_string(users).map_err(anyhow::Error::from)?;
        store.write(store_keys::USERS, &raw).await
    }

    /// Find a user by id
    pub async fn find_by_id(store: &dyn BlobStore, id: Uuid) -> AppResult<Option<User>> {
        Ok(Self::load_all(store).await?.into_iter().find(|u| u.id == id))
    }

    /// Find a user by email (case-sensitive, matching the uniqueness rule)
    pub async fn find_by_email(store: &dyn BlobStore, email: &str) -> AppResult<Option<User>> {
        Ok(Self::load_all(store)
            .await?
            .into_iter()
            .find(|u| u.email == email))
    }

    /// Replace the record matching `user.id`, or append if absent
    pub async fn upsert(store: &dyn BlobStore, user: &User) -> AppResult<()> {
        let mut users = Self::load_all(store).await?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Self::save_all(store, &users).await
    }
}

/// Repository for the Posts collection
pub struct PostRepository;

impl PostRepository {
    /// Load the full Posts collection
    pub async fn load_all(store: &dyn BlobStore) -> AppResult<Vec<Post>> {
        let raw = store.read(store_keys::POSTS).await?;
        Ok(parse_collection(store_keys::POSTS, raw))
    }

    /// Replace the full Posts collection
    pub async fn save_all(store: &dyn BlobStore, posts: &[Post]) -> AppResult<()> {
        let raw = serde_json::to_string(posts).map_err(anyhow::Error::from)?;
        store.write(store_keys::POSTS, &raw).await
    }
}

/// Repository for the single persisted session reference
pub struct SessionRepository;

impl SessionRepository {
    /// Load the persisted session user, if any. Malformed payloads read as
    /// "no session".
    pub async fn load(store: &dyn BlobStore) -> AppResult<Option<User>> {
        let raw = store.read(store_keys::CURRENT_SESSION).await?;
        Ok(raw.and_then(|raw| match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "malformed session payload, treating as anonymous");
                None
            }
        }))
    }

    /// Persist the active session's user reference
    pub async fn save(store: &dyn BlobStore, user: &User) -> AppResult<()> {
        let raw = serde_json::to_string(user).map_err(anyhow::Error::from)?;
        store.write(store_keys::CURRENT_SESSION, &raw).await
    }

    /// Clear the persisted session
    pub async fn clear(store: &dyn BlobStore) -> AppResult<()> {
        store.remove(store_keys::CURRENT_SESSION).await
    }
}
