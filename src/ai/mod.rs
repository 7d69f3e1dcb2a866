//! Generative-content collaborator
//!
//! The application treats content generation as an opaque external service:
//! given a text prompt (and optionally a reference image) it asynchronously
//! returns generated text, an image payload, or a video reference, and may
//! fail or return nothing. Failures never touch persisted state; posts are
//! only saved after a successful generation step and an explicit user save.

pub mod gemini;

pub use gemini::GeminiClient;

use async_trait::async_trait;

use crate::error::AppResult;

/// Contract for the generative AI backend.
///
/// `image` and `video` distinguish "nothing produced" (`Ok(None)`) from an
/// actual failure (`Err`); callers surface the latter as a generic notice.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generate a caption for a social-media post about `topic`.
    /// `kind_label` is a free-form description of the post kind used to
    /// steer the prompt.
    async fn caption(&self, topic: &str, kind_label: &str) -> AppResult<String>;

    /// Generate an image for `prompt`, returned as a `data:` URL.
    /// `None` means no image was produced.
    async fn image(&self, prompt: &str) -> AppResult<Option<String>>;

    /// Generate a short video from `script`, optionally animating a
    /// reference image. Long-running; the implementation polls the backend
    /// until the job completes. `None` means no video was produced.
    async fn video<'a>(&self, script: &str, reference_image: Option<&'a str>)
    -> AppResult<Option<String>>;
}
