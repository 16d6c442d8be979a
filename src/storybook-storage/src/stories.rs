//! Typed persistence for the current story and the theme preference.

use storybook_protocol::{StoryBook, ThemePreference};
use tracing::{debug, warn};

use crate::error::Result;
use crate::kv::KeyValueStore;

/// Key under which the current story is saved.
pub const STORY_KEY: &str = "ai-storybook";

/// Key under which the theme preference is saved.
pub const THEME_KEY: &str = "theme";

/// Saves and restores the current story.
#[derive(Debug, Clone)]
pub struct StoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> StoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key-value store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Persist `story` as the current story.
    pub fn save(&self, story: &StoryBook) -> Result<()> {
        let json = serde_json::to_string(story)?;
        self.store.set(STORY_KEY, &json)?;
        debug!(title = %story.title, pages = story.pages.len(), "Story saved");
        Ok(())
    }

    /// Load the saved story.
    ///
    /// A value that no longer parses as a story is removed and reported as
    /// absent, so a bad entry never blocks startup.
    pub fn load(&self) -> Result<Option<StoryBook>> {
        let Some(raw) = self.store.get(STORY_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(story) => Ok(Some(story)),
            Err(e) => {
                warn!(error = %e, "Failed to load story from local storage, discarding it");
                self.store.remove(STORY_KEY)?;
                Ok(None)
            }
        }
    }

    /// Forget the saved story.
    pub fn clear(&self) -> Result<()> {
        self.store.remove(STORY_KEY)
    }
}

/// Saves and restores the light/dark preference.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored preference; anything unrecognized reads as `System`.
    pub fn get(&self) -> Result<ThemePreference> {
        let stored = self.store.get(THEME_KEY)?;
        Ok(ThemePreference::from_stored(stored.as_deref()))
    }

    pub fn set(&self, preference: ThemePreference) -> Result<()> {
        self.store.set(THEME_KEY, preference.as_str())
    }
}
