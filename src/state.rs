//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor, and the ambient
//! session it owns. The synchronization loop is the sole writer of the
//! session snapshot during reconciliation; everything else reads it.

use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::ai::ContentGenerator;
use crate::config::Config;
use crate::models::User;
use crate::store::BlobStore;

/// The single ambient session of this runtime.
///
/// A blocked-forced-logout is not a resting state: it resolves immediately
/// to `Anonymous` with a queued [`Notice`].
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Anonymous,
    /// Authenticated non-admin user on the user surface
    User(User),
    /// Authenticated administrator on the admin surface
    Admin(User),
}

impl Session {
    /// Route a freshly authenticated user to the right surface
    pub fn from_user(user: User) -> Self {
        if user.is_admin {
            Session::Admin(user)
        } else {
            Session::User(user)
        }
    }

    /// The authenticated user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::User(u) | Session::Admin(u) => Some(u),
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Session::Anonymous)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Session::Admin(_))
    }
}

/// Locally queued, user-visible notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The account backing the active session was blocked remotely
    AccountBlocked,
    /// The account backing the active session no longer exists
    AccountRemoved,
    /// A scheduled post entered its due window
    PostDue { post_id: Uuid },
}

impl Notice {
    /// User-facing message for this notice
    pub fn message(&self) -> String {
        match self {
            Notice::AccountBlocked => {
                "Your account has been blocked. Contact support.".to_string()
            }
            Notice::AccountRemoved => "Your account no longer exists.".to_string(),
            Notice::PostDue { .. } => "Your scheduled publication is ready to post now.".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Blob store holding the Users/Posts collections and the session key
    store: Arc<dyn BlobStore>,

    /// Generative AI collaborator
    generator: Arc<dyn ContentGenerator>,

    /// Application configuration
    config: Config,

    /// Ambient session snapshot
    session: RwLock<Session>,

    /// Locally queued notices, drained by the surface
    notices: Mutex<Vec<Notice>>,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        store: Arc<dyn BlobStore>,
        generator: Arc<dyn ContentGenerator>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store,
                generator,
                config,
                session: RwLock::new(Session::Anonymous),
                notices: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Get a reference to the blob store
    pub fn store(&self) -> &dyn BlobStore {
        self.inner.store.as_ref()
    }

    /// Get a reference to the content generator
    pub fn generator(&self) -> &dyn ContentGenerator {
        self.inner.generator.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Snapshot of the current session
    pub async fn session(&self) -> Session {
        self.inner.session.read().await.clone()
    }

    /// The currently authenticated user, if any
    pub async fn current_user(&self) -> Option<User> {
        self.inner.session.read().await.user().cloned()
    }

    /// Replace the session snapshot
    pub async fn set_session(&self, session: Session) {
        *self.inner.session.write().await = session;
    }

    /// Queue a user-visible notice
    pub fn push_notice(&self, notice: Notice) {
        self.inner
            .notices
            .lock()
            .expect("notice queue poisoned")
            .push(notice);
    }

    /// Take all queued notices, leaving the queue empty
    pub fn drain_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.inner.notices.lock().expect("notice queue poisoned"))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_routes_admins_to_admin_surface() {
        let admin = User::new("Root".into(), "root@example.com".into(), "pw".into(), true);
        assert!(Session::from_user(admin).is_admin());

        let user = User::new("Ana".into(), "ana@example.com".into(), "pw".into(), false);
        assert!(!Session::from_user(user).is_admin());
    }

    #[tokio::test]
    async fn notices_drain_once() {
        let state = test_support::test_state();
        state.push_notice(Notice::AccountBlocked);
        state.push_notice(Notice::AccountRemoved);

        let drained = state.drain_notices();
        assert_eq!(drained.len(), 2);
        assert!(state.drain_notices().is_empty());
    }
}
