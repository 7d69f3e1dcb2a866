//! Health check handlers

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::constants::store_keys;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check endpoint. Probes the blob store so a broken data directory
/// is visible before the first real request fails.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = match state.store().read(store_keys::USERS).await {
        Ok(_) => "healthy",
        Err(_) => "degraded",
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
