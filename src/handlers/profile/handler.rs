//! Profile handler implementations

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    error::AppResult, handlers::auth::response::UserResponse, services::UserService,
    state::AppState,
};

use super::request::UpdateLinksRequest;

/// Update the active user's social profile links
pub async fn update_links(
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinksRequest>,
) -> AppResult<Json<UserResponse>> {
    payload.validate()?;

    let user =
        UserService::update_profile_links(&state, payload.instagram_url, payload.facebook_url)
            .await?;
    Ok(Json(user.into()))
}
