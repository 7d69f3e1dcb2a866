//! Gemini REST client
//!
//! Captions and images go through `generateContent`; video goes through the
//! long-running `predictLongRunning` operation, polled until done.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::ai::ContentGenerator;
use crate::config::GeminiConfig;
use crate::constants::{VIDEO_POLL_SECS, gemini_models};
use crate::error::{AppError, AppResult};

/// Client for the Generative Language REST API
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> AppResult<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );
        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Generation(format!(
                "backend returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("malformed response: {e}")))
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn caption(&self, topic: &str, kind_label: &str) -> AppResult<String> {
        let prompt = format!(
            "Escreva uma legenda envolvente para um post de mídia social (Instagram/Facebook).\n\
             Tópico: {topic}\n\
             Tipo de post: {kind_label}\n\
             Idioma: Português (Moçambique).\n\
             Inclua hashtags relevantes."
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        };

        let response = self
            .generate_content(gemini_models::CAPTION, &request)
            .await?;
        response
            .first_text()
            .ok_or_else(|| AppError::Generation("empty caption response".to_string()))
    }

    async fn image(&self, prompt: &str) -> AppResult<Option<String>> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt.to_string())],
            }],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: "1:1".to_string(),
                }),
            }),
        };

        let response = self.generate_content(gemini_models::IMAGE, &request).await?;
        Ok(response
            .first_inline_data()
            .map(|data| format!("data:image/png;base64,{data}")))
    }

    async fn video<'a>(
        &self,
        script: &str,
        reference_image: Option<&'a str>,
    ) -> AppResult<Option<String>> {
        let image = reference_image.map(|data_url| {
            // Strip a data-URL header if present; the API wants bare base64.
            let bytes = data_url.rsplit(',').next().unwrap_or(data_url);
            VideoImage {
                bytes_base64_encoded: bytes.to_string(),
                mime_type: "image/png".to_string(),
            }
        });

        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.base_url,
            gemini_models::VIDEO,
            self.api_key
        );
        let request = VideoRequest {
            instances: vec![VideoInstance {
                prompt: script.to_string(),
                image,
            }],
            parameters: VideoParameters {
                aspect_ratio: "9:16".to_string(),
                resolution: "720p".to_string(),
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(AppError::Generation(format!(
                "backend returned {}",
                response.status()
            )));
        }
        let mut operation: Operation = response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("malformed response: {e}")))?;

        // Poll until the operation completes; the backend owns the timeout.
        while !operation.done {
            tokio::time::sleep(Duration::from_secs(VIDEO_POLL_SECS)).await;
            let poll_url = format!("{}/{}?key={}", self.base_url, operation.name, self.api_key);
            operation = self
                .http
                .get(&poll_url)
                .send()
                .await
                .map_err(|e| AppError::Generation(format!("poll failed: {e}")))?
                .json()
                .await
                .map_err(|e| AppError::Generation(format!("malformed operation: {e}")))?;
        }

        Ok(operation
            .video_uri()
            .map(|uri| format!("{uri}&key={}", self.api_key)))
    }
}

// --- wire types ---

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "imageConfig", skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
struct ImageConfig {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl Part {
    fn text(text: String) -> Self {
        Self { text: Some(text) }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.text.clone())
    }

    fn first_inline_data(&self) -> Option<String> {
        self.candidates
            .first()?
            .content
            .parts
            .iter()
            .find_map(|p| p.inline_data.as_ref().map(|d| d.data.clone()))
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "inlineData", default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

#[derive(Debug, Serialize)]
struct VideoRequest {
    instances: Vec<VideoInstance>,
    parameters: VideoParameters,
}

#[derive(Debug, Serialize)]
struct VideoInstance {
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<VideoImage>,
}

#[derive(Debug, Serialize)]
struct VideoImage {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

#[derive(Debug, Serialize)]
struct VideoParameters {
    #[serde(rename = "aspectRatio")]
    aspect_ratio: String,
    resolution: String,
}

#[derive(Debug, Deserialize)]
struct Operation {
    #[serde(default)]
    name: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    response: Option<OperationResponse>,
}

impl Operation {
    fn video_uri(&self) -> Option<String> {
        self.response
            .as_ref()?
            .generate_video_response
            .as_ref()?
            .generated_samples
            .first()?
            .video
            .as_ref()
            .map(|v| v.uri.clone())
    }
}

#[derive(Debug, Deserialize)]
struct OperationResponse {
    #[serde(rename = "generateVideoResponse", default)]
    generate_video_response: Option<GenerateVideoResponse>,
}

#[derive(Debug, Deserialize)]
struct GenerateVideoResponse {
    #[serde(rename = "generatedSamples", default)]
    generated_samples: Vec<GeneratedSample>,
}

#[derive(Debug, Deserialize)]
struct GeneratedSample {
    #[serde(default)]
    video: Option<VideoRef>,
}

#[derive(Debug, Deserialize)]
struct VideoRef {
    uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_text_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"Legenda #top"}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("Legenda #top"));
        assert!(response.first_inline_data().is_none());
    }

    #[test]
    fn parses_inline_image_candidate() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"inlineData":{"mimeType":"image/png","data":"QUJD"}}]}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_inline_data().as_deref(), Some("QUJD"));
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.first_text().is_none());
    }

    #[test]
    fn extracts_video_uri_from_finished_operation() {
        let raw = r#"{
            "name": "operations/abc",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [{"video": {"uri": "https://example.com/v.mp4?x=1"}}]
                }
            }
        }"#;
        let op: Operation = serde_json::from_str(raw).unwrap();
        assert!(op.done);
        assert_eq!(
            op.video_uri().as_deref(),
            Some("https://example.com/v.mp4?x=1")
        );
    }
}
