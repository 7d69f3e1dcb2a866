//! Business logic services

pub mod access;
pub mod admin_service;
pub mod post_service;
pub mod session_service;
pub mod sync_service;
pub mod user_service;

pub use admin_service::AdminService;
pub use post_service::PostService;
pub use session_service::SessionService;
pub use user_service::UserService;
