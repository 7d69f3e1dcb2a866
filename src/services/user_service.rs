//! User profile operations

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::User;
use crate::state::{AppState, Session};
use crate::store::{SessionRepository, UserRepository};

/// User service
pub struct UserService;

impl UserService {
    /// Update the active user's social profile links.
    ///
    /// An empty string clears a link. The persisted session reference is
    /// rewritten too, so a restart restores the updated profile.
    pub async fn update_profile_links(
        state: &AppState,
        instagram_url: Option<String>,
        facebook_url: Option<String>,
    ) -> AppResult<User> {
        let mut user = state
            .current_user()
            .await
            .ok_or(AppError::SessionRequired)?;

        user.instagram_url = instagram_url.filter(|s| !s.is_empty());
        user.facebook_url = facebook_url.filter(|s| !s.is_empty());

        UserRepository::upsert(state.store(), &user).await?;
        SessionRepository::save(state.store(), &user).await?;
        state.set_session(Session::from_user(user.clone())).await;

        info!(user_id = %user.id, "profile links updated");
        Ok(user)
    }
}
