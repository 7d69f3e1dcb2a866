//! Admin handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::AppResult,
    middleware::AdminUser,
    services::{AdminService, admin_service::SystemStats},
    state::AppState,
};

use super::{
    request::{ListUsersQuery, SetBlockedRequest, SetPlanRequest},
    response::{ManagedUserResponse, UserListResponse},
};

/// List managed accounts, optionally filtered by a search term
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(query): Query<ListUsersQuery>,
) -> AppResult<Json<UserListResponse>> {
    let now = Utc::now();
    let users = AdminService::list_users(state.store(), query.search.as_deref()).await?;

    let users: Vec<ManagedUserResponse> = users
        .into_iter()
        .map(|u| ManagedUserResponse::from_user(u, now))
        .collect();
    Ok(Json(UserListResponse {
        total: users.len(),
        users,
    }))
}

/// Assign a subscription plan to a managed account
pub async fn set_plan(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetPlanRequest>,
) -> AppResult<Json<ManagedUserResponse>> {
    let user = AdminService::set_plan(state.store(), id, payload.plan).await?;
    Ok(Json(ManagedUserResponse::from_user(user, Utc::now())))
}

/// Block or unblock a managed account
pub async fn set_blocked(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<SetBlockedRequest>,
) -> AppResult<Json<ManagedUserResponse>> {
    let user = AdminService::set_blocked(state.store(), id, payload.blocked).await?;
    Ok(Json(ManagedUserResponse::from_user(user, Utc::now())))
}

/// Grant a managed account a fresh trial starting now
pub async fn reset_trial(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ManagedUserResponse>> {
    let user = AdminService::reset_trial(state.store(), id).await?;
    Ok(Json(ManagedUserResponse::from_user(user, Utc::now())))
}

/// Aggregate counters over the managed user base
pub async fn get_stats(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> AppResult<Json<SystemStats>> {
    let stats = AdminService::stats(state.store()).await?;
    Ok(Json(stats))
}
