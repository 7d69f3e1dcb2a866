//! Post handler implementations
//!
//! Creation is gated on the access policy; listing and deletion stay
//! available to an expired account so drafts remain reachable.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::CurrentUser,
    models::Post,
    services::{PostService, access},
    state::AppState,
};

use super::{
    request::CreatePostRequest,
    response::{DeletePostResponse, PostListResponse},
};

/// List the active user's posts in creation order
pub async fn list_posts(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<PostListResponse>> {
    let posts = PostService::list_for_user(state.store(), user.id).await?;
    Ok(Json(PostListResponse::new(posts)))
}

/// List the active user's scheduled posts, soonest first
pub async fn list_scheduled(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<PostListResponse>> {
    let posts = PostService::scheduled_for_user(state.store(), user.id).await?;
    Ok(Json(PostListResponse::new(posts)))
}

/// Create a draft or scheduled post
pub async fn create_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<CreatePostRequest>,
) -> AppResult<(StatusCode, Json<Post>)> {
    payload.validate()?;

    if !access::check_access(Some(&user), Utc::now()) {
        return Err(AppError::FeatureGated);
    }

    let post = PostService::create_post(
        state.store(),
        user.id,
        payload.kind,
        payload.content.into(),
        payload.scheduled_time,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Delete one of the active user's posts
pub async fn delete_post(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeletePostResponse>> {
    // Scope deletion to the caller's own posts.
    let owned = PostService::list_for_user(state.store(), user.id).await?;
    if !owned.iter().any(|p| p.id == id) {
        return Err(AppError::NotFound("post not found".to_string()));
    }

    PostService::delete_post(state.store(), id).await?;
    Ok(Json(DeletePostResponse {
        message: "Post deleted successfully".to_string(),
    }))
}
