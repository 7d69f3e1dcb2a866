//! PostMaster MZ - Social Media Content Service
//!
//! This library provides the core functionality for PostMaster MZ, a
//! drafting and scheduling service for small-business social media posts.
//!
//! # Features
//!
//! - Trial and subscription access control (72h trial, admin-assigned plans)
//! - Single ambient session with forced logout on remote block/removal
//! - Background synchronization against a shared file-backed store
//! - Post drafting, scheduling, and due reminders
//! - AI-assisted caption, image, and video generation
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Store**: Opaque blob store and typed repositories
//! - **Models**: Domain models and DTOs

pub mod ai;
pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
