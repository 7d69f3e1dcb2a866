//! Content generation response DTOs

use serde::Serialize;

/// Generated caption
#[derive(Debug, Serialize)]
pub struct CaptionResponse {
    pub caption: String,
}

/// Generated image, as a data URL when the backend produced one
#[derive(Debug, Serialize)]
pub struct ImageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Generated video download URL, when the backend produced one
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}
