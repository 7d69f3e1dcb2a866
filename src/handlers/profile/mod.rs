//! Profile handlers

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{Router, routing::put};

use crate::state::AppState;

/// Profile routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/links", put(handler::update_links))
}
