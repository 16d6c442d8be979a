//! Command dispatch and the context shared by every command.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use storybook_engine::StorySession;
use storybook_storage::{FileStore, KeyValueStore, STORY_KEY, StoryPaths, StoryStore, ThemeStore};
use tracing::{debug, warn};

use super::args::{Cli, Commands};

/// Resolved storage locations and the store backing them.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub paths: StoryPaths,
    store: Arc<FileStore>,
}

impl AppContext {
    /// Resolve paths from the global flags, falling back to the platform
    /// locations.
    pub fn new(data_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Result<Self> {
        let mut paths = match data_dir {
            Some(root) => StoryPaths::from_root(root),
            None => StoryPaths::new().context("Failed to determine the storybook data directory")?,
        };
        if let Some(config_file) = config_file {
            paths.config_file = config_file;
        }
        debug!(store = %paths.store_file.display(), config = %paths.config_file.display(), "Resolved storybook paths");

        let store = Arc::new(FileStore::new(&paths.store_file));
        Ok(Self { paths, store })
    }

    pub fn stories(&self) -> StoryStore<Arc<FileStore>> {
        StoryStore::new(Arc::clone(&self.store))
    }

    pub fn themes(&self) -> ThemeStore<Arc<FileStore>> {
        ThemeStore::new(Arc::clone(&self.store))
    }

    pub fn session(&self) -> StorySession<Arc<FileStore>> {
        StorySession::new(Arc::clone(&self.store))
    }

    /// Whether anything is stored under the story key, readable or not.
    pub fn has_saved_entry(&self) -> bool {
        match self.store.get(STORY_KEY) {
            Ok(entry) => entry.is_some(),
            Err(e) => {
                warn!(error = %e, "Failed to read the store file");
                true
            }
        }
    }
}

/// Dispatch a CLI command to its handler.
pub async fn dispatch_command(cli: Cli) -> Result<()> {
    let ctx = AppContext::new(cli.data_dir, cli.config)?;
    match cli.command {
        Commands::Share(cmd) => cmd.run(&ctx).await,
        Commands::Open(cmd) => cmd.run(&ctx).await,
        Commands::Show(cmd) => cmd.run(&ctx).await,
        Commands::Clear(cmd) => cmd.run(&ctx).await,
        Commands::Theme(cmd) => cmd.run(&ctx).await,
        Commands::Config(cmd) => cmd.run(&ctx).await,
    }
}
