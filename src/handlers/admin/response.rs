//! Admin response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{PlanType, User};
use crate::services::access;

/// Managed account as seen from the admin surface
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub plan: PlanType,
    pub is_blocked: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub trial_start_date: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub trial_expires_at: DateTime<Utc>,
    pub has_access: bool,
}

impl ManagedUserResponse {
    pub fn from_user(user: User, now: DateTime<Utc>) -> Self {
        Self {
            trial_expires_at: access::trial_expires_at(&user),
            has_access: access::check_access(Some(&user), now),
            id: user.id,
            name: user.name,
            email: user.email,
            plan: user.plan,
            is_blocked: user.is_blocked,
            trial_start_date: user.trial_start_date,
        }
    }
}

/// User listing response
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<ManagedUserResponse>,
    pub total: usize,
}
