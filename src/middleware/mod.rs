//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{AdminUser, CurrentUser};
pub use logging::logging_middleware;
