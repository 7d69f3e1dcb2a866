//! Session extractors
//!
//! Handlers declare who they serve by taking one of these extractors; the
//! ambient session in [`AppState`] is the single source of truth. There is
//! no per-request credential, so extraction is a snapshot read, never a
//! verification step.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::debug;

use crate::error::AppError;
use crate::models::User;
use crate::state::{AppState, Session};

/// The authenticated user behind the active session
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.session().await.user() {
            Some(user) => Ok(CurrentUser(user.clone())),
            None => {
                debug!(path = %parts.uri.path(), "rejected: no active session");
                Err(AppError::SessionRequired)
            }
        }
    }
}

/// The authenticated administrator behind the active session
#[derive(Debug, Clone)]
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match state.session().await {
            Session::Admin(user) => Ok(AdminUser(user)),
            Session::User(_) => {
                debug!(path = %parts.uri.path(), "rejected: administrator required");
                Err(AppError::AccessDenied(
                    "administrator account required".to_string(),
                ))
            }
            Session::Anonymous => {
                debug!(path = %parts.uri.path(), "rejected: no active session");
                Err(AppError::SessionRequired)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SessionService;
    use crate::state::test_support::test_state;
    use axum::http::Request;

    fn parts() -> Parts {
        Request::builder()
            .uri("/api/v1/posts")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn anonymous_sessions_are_rejected() {
        let state = test_state();
        let mut parts = parts();

        let err = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SessionRequired));
        let err = AdminUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::SessionRequired));
    }

    #[tokio::test]
    async fn user_sessions_extract_but_are_not_admins() {
        let state = test_state();
        SessionService::register(&state, "Ana", "ana@example.com", "pw", false)
            .await
            .unwrap();
        let mut parts = parts();

        let CurrentUser(user) = CurrentUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user.email, "ana@example.com");

        let err = AdminUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::AccessDenied(_)));
    }

    #[tokio::test]
    async fn admin_sessions_extract_as_both() {
        let state = test_state();
        SessionService::register(&state, "Root", "root@example.com", "pw", true)
            .await
            .unwrap();
        let mut parts = parts();

        assert!(
            CurrentUser::from_request_parts(&mut parts, &state)
                .await
                .is_ok()
        );
        assert!(
            AdminUser::from_request_parts(&mut parts, &state)
                .await
                .is_ok()
        );
    }
}
