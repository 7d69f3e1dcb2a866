//! Content generation handler implementations
//!
//! Every generation endpoint is behind the same access gate as post
//! creation: generation spends quota, drafts do not.

use axum::{Json, extract::State};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::CurrentUser,
    models::User,
    services::access,
    state::AppState,
};

use super::{
    request::{CaptionRequest, ImageRequest, VideoRequest},
    response::{CaptionResponse, ImageResponse, VideoResponse},
};

fn require_access(user: &User) -> AppResult<()> {
    if access::check_access(Some(user), Utc::now()) {
        Ok(())
    } else {
        Err(AppError::FeatureGated)
    }
}

/// Generate a caption for a post topic
pub async fn generate_caption(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CaptionRequest>,
) -> AppResult<Json<CaptionResponse>> {
    payload.validate()?;
    require_access(&user)?;

    let caption = state
        .generator()
        .caption(&payload.topic, payload.kind.as_str())
        .await?;
    Ok(Json(CaptionResponse { caption }))
}

/// Generate a square image from a prompt
pub async fn generate_image(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ImageRequest>,
) -> AppResult<Json<ImageResponse>> {
    payload.validate()?;
    require_access(&user)?;

    let image = state.generator().image(&payload.prompt).await?;
    Ok(Json(ImageResponse { image }))
}

/// Generate a short vertical video from a script
pub async fn generate_video(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<VideoRequest>,
) -> AppResult<Json<VideoResponse>> {
    payload.validate()?;
    require_access(&user)?;

    let video_url = state
        .generator()
        .video(&payload.script, payload.reference_image.as_deref())
        .await?;
    Ok(Json(VideoResponse { video_url }))
}
