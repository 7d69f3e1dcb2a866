//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{PlanType, User};
use crate::services::access;

/// User information in auth responses. Never carries the password.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub trial_start_date: DateTime<Utc>,
    pub plan: PlanType,
    pub is_blocked: bool,
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            trial_start_date: user.trial_start_date,
            plan: user.plan,
            is_blocked: user.is_blocked,
            is_admin: user.is_admin,
            instagram_url: user.instagram_url,
            facebook_url: user.facebook_url,
        }
    }
}

/// Login/registration success response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub has_access: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub trial_expires_at: DateTime<Utc>,
}

impl AuthResponse {
    pub fn for_user(user: User, now: DateTime<Utc>) -> Self {
        Self {
            has_access: access::check_access(Some(&user), now),
            trial_expires_at: access::trial_expires_at(&user),
            user: user.into(),
        }
    }
}

/// Session inspection response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    pub is_admin: bool,
    pub has_access: bool,
    #[serde(
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub trial_expires_at: Option<DateTime<Utc>>,
}

/// Logout response
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}
