//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Authentication routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handler::register))
        .route("/login", post(handler::login))
        .route("/admin/register", post(handler::admin_register))
        .route("/admin/login", post(handler::admin_login))
        .route("/logout", post(handler::logout))
        .route("/session", get(handler::get_session))
}
