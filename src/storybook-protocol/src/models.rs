//! Shapes returned by the generative text model before illustration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One paragraph plus the prompt for its illustration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawPage {
    /// One paragraph of the story.
    pub paragraph: String,
    /// A prompt for an illustration for this paragraph.
    pub image_prompt: String,
}

/// Story text as produced by the model, before images are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RawStory {
    /// A creative title for the story.
    pub title: String,
    pub pages: Vec<RawPage>,
}

impl RawStory {
    /// JSON schema the text model's response must follow.
    pub fn response_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(RawStory);
        serde_json::to_value(schema).unwrap_or(serde_json::Value::Null)
    }
}
