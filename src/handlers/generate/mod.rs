//! Content generation handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::post};

use crate::state::AppState;

/// Generation routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/caption", post(handler::generate_caption))
        .route("/image", post(handler::generate_image))
        .route("/video", post(handler::generate_video))
}
