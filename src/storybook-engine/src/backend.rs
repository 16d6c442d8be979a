//! Seam to the generative text/image service.
//!
//! A backend is an explicitly constructed value (usually holding an
//! [`EngineConfig`](crate::EngineConfig)) handed to the generation pipeline.
//! It only moves prompts and bytes; prompt wording and response validation
//! live in this crate.

use async_trait::async_trait;
use serde_json::Value;
use storybook_protocol::RawStory;
use thiserror::Error;

/// Error reported by a generative backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Failed to generate the story's text: {0}")]
    Text(String),

    #[error("Failed to generate an illustration: {0}")]
    Image(String),

    #[error("Invalid response from the generative service: {0}")]
    InvalidResponse(String),
}

/// An illustration returned by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub base64_data: String,
}

impl GeneratedImage {
    pub fn new(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            base64_data: base64_data.into(),
        }
    }

    /// `data:` URL suitable for a page's `imageUrl`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

/// Generative text and image service.
#[async_trait]
pub trait StoryBackend: Send + Sync {
    /// Ask the text model for a JSON response following `response_schema`.
    /// Returns the raw response text.
    async fn generate_text(&self, prompt: &str, response_schema: &Value)
    -> Result<String, BackendError>;

    /// Ask the image model for one illustration.
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, BackendError>;
}

/// Parse the text model's response into a [`RawStory`].
pub fn parse_story_response(text: &str) -> Result<RawStory, BackendError> {
    serde_json::from_str(text).map_err(|e| {
        BackendError::InvalidResponse(format!(
            "AI failed to generate story content in the expected format ({e})"
        ))
    })
}
