//! Notification handlers
//!
//! Notices accumulate in the state queue between polls; fetching them
//! drains the queue, so each notice is delivered once.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use uuid::Uuid;

use crate::state::{AppState, Notice};

/// A single queued notification
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub kind: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_id: Option<Uuid>,
}

impl From<Notice> for NotificationResponse {
    fn from(notice: Notice) -> Self {
        let message = notice.message();
        match notice {
            Notice::AccountBlocked => Self {
                kind: "ACCOUNT_BLOCKED".to_string(),
                message,
                post_id: None,
            },
            Notice::AccountRemoved => Self {
                kind: "ACCOUNT_REMOVED".to_string(),
                message,
                post_id: None,
            },
            Notice::PostDue { post_id } => Self {
                kind: "POST_DUE".to_string(),
                message,
                post_id: Some(post_id),
            },
        }
    }
}

/// Queued notifications payload
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub notifications: Vec<NotificationResponse>,
}

/// Drain and return all queued notifications
async fn list_notifications(State(state): State<AppState>) -> Json<NotificationListResponse> {
    let notifications = state
        .drain_notices()
        .into_iter()
        .map(NotificationResponse::from)
        .collect();
    Json(NotificationListResponse { notifications })
}

/// Notification routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_notifications))
}
