//! Post handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

/// Post routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_posts).post(handler::create_post))
        .route("/scheduled", get(handler::list_scheduled))
        .route("/{id}", delete(handler::delete_post))
}
