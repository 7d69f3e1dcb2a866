//! Admin request DTOs

use serde::Deserialize;

use crate::models::PlanType;

/// User listing query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    /// Case-insensitive substring matched against name and email
    pub search: Option<String>,
}

/// Plan assignment request
#[derive(Debug, Deserialize)]
pub struct SetPlanRequest {
    pub plan: PlanType,
}

/// Block flag update request
#[derive(Debug, Deserialize)]
pub struct SetBlockedRequest {
    pub blocked: bool,
}
