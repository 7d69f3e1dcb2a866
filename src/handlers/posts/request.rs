//! Post request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::{PostContent, PostType};

/// Post creation request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(rename = "type")]
    pub kind: PostType,

    #[validate(nested)]
    pub content: PostContentRequest,

    #[serde(with = "chrono::serde::ts_milliseconds_option", default)]
    pub scheduled_time: Option<DateTime<Utc>>,
}

/// Post content payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostContentRequest {
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    #[validate(length(max = 10))]
    pub images: Vec<String>,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub script: Option<String>,
}

impl From<PostContentRequest> for PostContent {
    fn from(req: PostContentRequest) -> Self {
        PostContent {
            text: req.text,
            images: req.images,
            video_url: req.video_url,
            script: req.script,
        }
    }
}
