//! Session management
//!
//! Resolves who the active actor is at login, at process start, and on every
//! reconciliation tick; detects remote changes (blocking, deletion) and
//! forces logout when continuing would operate on a stale identity.

use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::state::{AppState, Notice, Session};
use crate::store::{SessionRepository, UserRepository};

/// Session manager service
pub struct SessionService;

impl SessionService {
    /// Authenticate by exact email + password equality.
    ///
    /// `admin_entry` marks the administrator entry point: a non-admin match
    /// is rejected there. An admin matching through the normal entry point
    /// still gets a session, routed to the admin surface.
    pub async fn login(
        state: &AppState,
        email: &str,
        password: &str,
        admin_entry: bool,
    ) -> AppResult<User> {
        let users = UserRepository::load_all(state.store()).await?;
        let user = users
            .into_iter()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AppError::InvalidCredentials)?;

        if user.is_blocked {
            return Err(AppError::AccountBlocked);
        }
        if admin_entry && !user.is_admin {
            return Err(AppError::AccessDenied(
                "administrator account required".to_string(),
            ));
        }

        SessionRepository::save(state.store(), &user).await?;
        state.set_session(Session::from_user(user.clone())).await;
        info!(user_id = %user.id, admin = user.is_admin, "session established");

        Ok(user)
    }

    /// Register a new user and immediately establish a session.
    ///
    /// `admin_entry` creates the root administrator, allowed only while no
    /// administrator exists yet; afterwards the admin entry point only logs
    /// in.
    pub async fn register(
        state: &AppState,
        name: &str,
        email: &str,
        password: &str,
        admin_entry: bool,
    ) -> AppResult<User> {
        let store = state.store();
        let mut users = UserRepository::load_all(store).await?;

        if users.iter().any(|u| u.email == email) {
            return Err(AppError::AlreadyExists("email already registered".to_string()));
        }
        if admin_entry && users.iter().any(|u| u.is_admin) {
            return Err(AppError::AccessDenied(
                "an administrator is already provisioned".to_string(),
            ));
        }

        let user = User::new(
            name.to_string(),
            email.to_string(),
            password.to_string(),
            admin_entry,
        );
        users.push(user.clone());
        UserRepository::save_all(store, &users).await?;

        SessionRepository::save(store, &user).await?;
        state.set_session(Session::from_user(user.clone())).await;
        info!(user_id = %user.id, admin = user.is_admin, "user registered");

        Ok(user)
    }

    /// Explicit logout: clear the persisted session reference and reset the
    /// ambient session
    pub async fn logout(state: &AppState) -> AppResult<()> {
        SessionRepository::clear(state.store()).await?;
        state.set_session(Session::Anonymous).await;
        Ok(())
    }

    /// Restore the persisted session at process start, applying the same
    /// resolution rules as reconciliation
    pub async fn restore(state: &AppState) -> AppResult<()> {
        let Some(stored) = SessionRepository::load(state.store()).await? else {
            return Ok(());
        };
        Self::resolve(state, stored.id).await
    }

    /// Re-resolve the active session against a fresh read of the Users
    /// collection. A no-op for anonymous sessions; idempotent when nothing
    /// changed.
    pub async fn reconcile(state: &AppState) -> AppResult<()> {
        let session = state.session().await;
        let Some(active) = session.user() else {
            return Ok(());
        };
        Self::resolve(state, active.id).await
    }

    async fn resolve(state: &AppState, user_id: uuid::Uuid) -> AppResult<()> {
        match UserRepository::find_by_id(state.store(), user_id).await? {
            None => Self::force_logout(state, Notice::AccountRemoved).await,
            Some(fresh) if fresh.is_blocked && !fresh.is_admin => {
                Self::force_logout(state, Notice::AccountBlocked).await
            }
            Some(fresh) => {
                // Picks up admin-driven plan/trial/flag changes without
                // requiring the user to log in again.
                state.set_session(Session::from_user(fresh)).await;
                Ok(())
            }
        }
    }

    async fn force_logout(state: &AppState, notice: Notice) -> AppResult<()> {
        warn!(reason = ?notice, "forcing logout of active session");
        SessionRepository::clear(state.store()).await?;
        state.set_session(Session::Anonymous).await;
        state.push_notice(notice);
        Ok(())
    }
}
