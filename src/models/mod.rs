//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod post;
pub mod user;

pub use post::*;
pub use user::*;
