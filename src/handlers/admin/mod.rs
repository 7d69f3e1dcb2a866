//! Admin management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Admin routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handler::list_users))
        .route("/users/{id}/plan", put(handler::set_plan))
        .route("/users/{id}/blocked", put(handler::set_blocked))
        .route("/users/{id}/trial-reset", post(handler::reset_trial))
        .route("/stats", get(handler::get_stats))
}
