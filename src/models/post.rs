//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of content a post carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostType {
    #[serde(rename = "TEXT_IMAGE")]
    TextImage,
    #[serde(rename = "CAROUSEL")]
    Carousel,
    #[serde(rename = "REEL")]
    Reel,
}

impl PostType {
    /// Wire name, also used to describe the kind in generation prompts
    pub fn as_str(&self) -> &'static str {
        match self {
            PostType::TextImage => "TEXT_IMAGE",
            PostType::Carousel => "CAROUSEL",
            PostType::Reel => "REEL",
        }
    }
}

/// Variant payload of a post. Which fields are populated depends on the
/// post kind, but the fields are deliberately not enforced as mutually
/// exclusive.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Ordered image references (data URLs or remote URLs)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

/// Post record as persisted in the Posts collection.
///
/// `user_id` is a deliberately unvalidated reference: posts whose owner was
/// deleted are tolerated on every read path. `is_posted` is informational
/// only; no core operation transitions it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub kind: PostType,
    pub content: PostContent,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub scheduled_time: Option<DateTime<Utc>>,
    pub is_posted: bool,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_legacy_field_names() {
        let post = Post {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            kind: PostType::TextImage,
            content: PostContent {
                text: Some("legenda".into()),
                ..Default::default()
            },
            scheduled_time: None,
            is_posted: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["type"], "TEXT_IMAGE");
        assert!(json.get("scheduledTime").is_none());
        assert_eq!(json["isPosted"], false);
        assert!(json["createdAt"].is_i64());
    }

    #[test]
    fn deserializes_record_without_optional_fields() {
        let raw = r#"{
            "id": "6dfdbd55-6f05-4a43-a6c9-5a77e7af02c5",
            "userId": "5cc21eb0-9c3f-4a5f-9d8b-16cdb5b3f6b1",
            "type": "REEL",
            "content": { "script": "cena" },
            "isPosted": false,
            "createdAt": 1700000000000
        }"#;
        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.kind, PostType::Reel);
        assert!(post.scheduled_time.is_none());
        assert!(post.content.images.is_empty());
    }
}
