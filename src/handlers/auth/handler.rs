//! Authentication handler implementations

use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::AppResult,
    services::{SessionService, access},
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, LogoutResponse, SessionResponse},
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let user = SessionService::register(
        &state,
        &payload.name,
        &payload.email,
        &payload.password,
        false,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::for_user(user, Utc::now())),
    ))
}

/// Register the root administrator (only while none exists)
pub async fn admin_register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    let user = SessionService::register(
        &state,
        &payload.name,
        &payload.email,
        &payload.password,
        true,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::for_user(user, Utc::now())),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let user = SessionService::login(&state, &payload.email, &payload.password, false).await?;
    Ok(Json(AuthResponse::for_user(user, Utc::now())))
}

/// Login through the administrator entry point
pub async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let user = SessionService::login(&state, &payload.email, &payload.password, true).await?;
    Ok(Json(AuthResponse::for_user(user, Utc::now())))
}

/// End the active session
pub async fn logout(State(state): State<AppState>) -> AppResult<Json<LogoutResponse>> {
    SessionService::logout(&state).await?;
    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// Inspect the active session and its access status
pub async fn get_session(State(state): State<AppState>) -> AppResult<Json<SessionResponse>> {
    let session = state.session().await;
    let now = Utc::now();

    let response = match session.user() {
        Some(user) => SessionResponse {
            is_admin: session.is_admin(),
            has_access: access::check_access(Some(user), now),
            trial_expires_at: Some(access::trial_expires_at(user)),
            user: Some(user.clone().into()),
        },
        None => SessionResponse {
            user: None,
            is_admin: false,
            has_access: false,
            trial_expires_at: None,
        },
    };

    Ok(Json(response))
}
