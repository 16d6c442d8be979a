//! Storybook Protocol - Data model shared between the engine, storage and CLI.
//!
//! Field names serialize in camelCase so documents stay interchangeable with
//! the stories produced by the Storybook web client.

pub mod models;
pub mod request;
pub mod story;
pub mod theme;

#[cfg(test)]
mod tests;

// Re-exports
pub use models::{RawPage, RawStory};
pub use request::{
    DEFAULT_PAGE_COUNT, MAX_PAGE_COUNT, MIN_PAGE_COUNT, RequestValidationError, StoryRequest,
};
pub use story::{StoryBook, StoryPage};
pub use theme::{Appearance, StoryTheme, ThemePreference};
