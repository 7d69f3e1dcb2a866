//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription plan. Any plan other than `Trial` is treated as permanently
/// active; payment is asserted by an administrator, never re-validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanType {
    #[serde(rename = "TRIAL")]
    Trial,
    #[serde(rename = "MENSAL")]
    Mensal,
    #[serde(rename = "TRIMESTRAL")]
    Trimestral,
    #[serde(rename = "ANUAL")]
    Anual,
}

impl PlanType {
    /// Whether this is a paid (non-trial) plan
    pub fn is_paid(self) -> bool {
        !matches!(self, PlanType::Trial)
    }
}

/// User record as persisted in the Users collection.
///
/// Field names and timestamp encoding match the records the legacy client
/// wrote, so an existing data directory stays readable. The password is
/// stored and compared in the clear; this is a flagged legacy concern, not a
/// contract to imitate elsewhere. API responses use dedicated DTOs that never
/// carry it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub trial_start_date: DateTime<Utc>,
    pub plan: PlanType,
    pub is_blocked: bool,
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_url: Option<String>,
}

impl User {
    /// Create a new user record with a fresh trial window starting now
    pub fn new(name: String, email: String, password: String, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password,
            trial_start_date: Utc::now(),
            // Administrators never consume a trial; they are provisioned
            // on the yearly plan outright.
            plan: if is_admin {
                PlanType::Anual
            } else {
                PlanType::Trial
            },
            is_blocked: false,
            is_admin,
            instagram_url: None,
            facebook_url: None,
        }
    }
}
