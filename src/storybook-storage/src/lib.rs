//! Storybook Storage - local persistence for stories and preferences.
//!
//! The web client keeps its state in browser `localStorage`; this crate models
//! that as a string [`KeyValueStore`] with an in-memory and a file-backed
//! implementation, plus typed wrappers for the two keys the application uses:
//!
//! - `ai-storybook`: the current story as JSON ([`StoryStore`])
//! - `theme`: the light/dark preference ([`ThemeStore`])
//!
//! # Usage
//!
//! ```rust,no_run
//! use storybook_storage::{FileStore, StoryPaths, StoryStore};
//!
//! fn main() -> storybook_storage::Result<()> {
//!     let paths = StoryPaths::new()?;
//!     let stories = StoryStore::new(FileStore::new(paths.store_file));
//!
//!     if let Some(story) = stories.load()? {
//!         println!("Saved story: {}", story.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod kv;
pub mod paths;
pub mod stories;

// Re-export main types at crate root
pub use error::{Result, StorageError};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use paths::{StoryPaths, storybook_config_dir, storybook_data_dir};
pub use stories::{STORY_KEY, StoryStore, THEME_KEY, ThemeStore};
