//! Story generation requests with validation support.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::StoryTheme;

/// Fewest pages a story may have.
pub const MIN_PAGE_COUNT: u32 = 3;

/// Most pages a story may have.
pub const MAX_PAGE_COUNT: u32 = 7;

/// Page count used when none is given.
pub const DEFAULT_PAGE_COUNT: u32 = 5;

/// Validation error for a [`StoryRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    #[error("Story prompt cannot be empty")]
    EmptyPrompt,
    #[error("Page count {count} is outside the allowed range {min}..={max}")]
    PageCountOutOfRange { count: u32, min: u32, max: u32 },
}

/// Everything needed to generate a storybook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRequest {
    /// Free-form story idea.
    pub prompt: String,
    #[serde(default)]
    pub theme: StoryTheme,
    #[serde(default = "default_page_count")]
    pub page_count: u32,
}

fn default_page_count() -> u32 {
    DEFAULT_PAGE_COUNT
}

impl StoryRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            theme: StoryTheme::default(),
            page_count: DEFAULT_PAGE_COUNT,
        }
    }

    pub fn with_theme(mut self, theme: StoryTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_page_count(mut self, page_count: u32) -> Self {
        self.page_count = page_count;
        self
    }

    /// Check the prompt is non-blank and the page count is in range.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(RequestValidationError::EmptyPrompt);
        }
        if !(MIN_PAGE_COUNT..=MAX_PAGE_COUNT).contains(&self.page_count) {
            return Err(RequestValidationError::PageCountOutOfRange {
                count: self.page_count,
                min: MIN_PAGE_COUNT,
                max: MAX_PAGE_COUNT,
            });
        }
        Ok(())
    }
}
