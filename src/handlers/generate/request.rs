//! Content generation request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_PROMPT_LENGTH;
use crate::models::PostType;

/// Caption generation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CaptionRequest {
    #[validate(length(min = 1, max = MAX_PROMPT_LENGTH))]
    pub topic: String,

    #[serde(rename = "type")]
    pub kind: PostType,
}

/// Image generation request
#[derive(Debug, Deserialize, Validate)]
pub struct ImageRequest {
    #[validate(length(min = 1, max = MAX_PROMPT_LENGTH))]
    pub prompt: String,
}

/// Video generation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VideoRequest {
    #[validate(length(min = 1, max = MAX_PROMPT_LENGTH))]
    pub script: String,

    /// Optional reference image (data URL or bare base64)
    #[serde(default)]
    pub reference_image: Option<String>,
}
