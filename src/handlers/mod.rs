//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod generate;
pub mod health;
pub mod notifications;
pub mod posts;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/posts", posts::routes())
        .nest("/generate", generate::routes())
        .nest("/profile", profile::routes())
        .nest("/notifications", notifications::routes())
        .nest("/admin", admin::routes())
}
