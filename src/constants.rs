//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// TRIAL & PLANS
// =============================================================================

/// Fixed trial window in hours, counted from `trial_start_date`.
/// Not configurable per user.
pub const TRIAL_DURATION_HOURS: i64 = 72;

// =============================================================================
// SYNCHRONIZATION
// =============================================================================

/// Unconditional poll interval for the reconciliation loop, in seconds.
/// Store change notifications trigger the same routine earlier when they
/// arrive; the poll is the fallback for writers outside this runtime.
pub const DEFAULT_SYNC_POLL_SECS: u64 = 2;

/// Interval of the due-schedule checker, in seconds
pub const DEFAULT_SCHEDULE_CHECK_SECS: u64 = 30;

/// Trailing window in which a scheduled post counts as "due", in seconds
pub const DUE_WINDOW_SECS: i64 = 60;

// =============================================================================
// STORE KEYS
// =============================================================================

/// Blob store keys. Kept identical to the keys the legacy client used so
/// existing data files remain readable.
pub mod store_keys {
    /// Full Users collection
    pub const USERS: &str = "postmaster_users";

    /// Full Posts collection
    pub const POSTS: &str = "postmaster_posts";

    /// At most one serialized User reference for the active session
    pub const CURRENT_SESSION: &str = "postmaster_current_user";
}

// =============================================================================
// GENERATION DEFAULTS
// =============================================================================

/// Gemini model identifiers
pub mod gemini_models {
    /// Caption generation
    pub const CAPTION: &str = "gemini-2.5-flash";

    /// Image generation (1:1, inline data response)
    pub const IMAGE: &str = "gemini-3-pro-image-preview";

    /// Video generation (long-running operation)
    pub const VIDEO: &str = "veo-3.1-fast-generate-preview";
}

/// Default base URL for the Generative Language REST API
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Poll interval while waiting for a video generation operation, in seconds
pub const VIDEO_POLL_SECS: u64 = 5;

// =============================================================================
// VALIDATION
// =============================================================================

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 1;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 100;

/// Maximum profile link length
pub const MAX_PROFILE_URL_LENGTH: u64 = 512;

/// Maximum topic/prompt length accepted by the generation endpoints
pub const MAX_PROMPT_LENGTH: u64 = 2000;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
