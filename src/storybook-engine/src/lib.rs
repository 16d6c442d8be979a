//! Storybook Engine - generation pipeline and application session.
//!
//! The engine never reaches for process-wide state: configuration is loaded
//! and validated once ([`EngineConfig::load`]), a [`StoryBackend`] is built
//! from it by the caller, and both are passed explicitly to the functions
//! that need them.

pub mod backend;
pub mod config;
pub mod generate;
pub mod prompt;
pub mod session;

pub use backend::{BackendError, GeneratedImage, StoryBackend, parse_story_response};
pub use config::{ConfigError, ConfigFile, EngineConfig};
pub use generate::{NoProgress, ProgressSink, generate_story_book};
pub use session::{StartupView, StorySession, StorySource};

use storybook_protocol::RequestValidationError;
use storybook_share::ShareError;
use storybook_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid story request: {0}")]
    InvalidRequest(#[from] RequestValidationError),
    #[error("AI failed to generate story content in the expected format.")]
    EmptyStory,
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("There is no story to share")]
    NoStory,
    #[error("Share error: {0}")]
    Share(#[from] ShareError),
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
