//! Profile request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_PROFILE_URL_LENGTH;

/// Social profile links update. An empty or absent field clears the link.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinksRequest {
    #[serde(default)]
    #[validate(length(max = MAX_PROFILE_URL_LENGTH))]
    pub instagram_url: Option<String>,

    #[serde(default)]
    #[validate(length(max = MAX_PROFILE_URL_LENGTH))]
    pub facebook_url: Option<String>,
}
