//! OS-aware path detection for Storybook storage.
//!
//! - **Windows**: `%APPDATA%\Storybook\`
//! - **macOS**: `~/Library/Application Support/Storybook/`
//! - **Linux**: `~/.local/share/Storybook/` (data), `~/.config/Storybook/` (config)
//!
//! `STORYBOOK_DATA_DIR` and `STORYBOOK_CONFIG_DIR` override the detected
//! locations.

use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, StorageError};

/// Application name used for storage directories.
pub const APP_NAME: &str = "Storybook";

/// File holding the key-value store.
pub const STORE_FILE: &str = "store.json";

/// Engine configuration file.
pub const CONFIG_FILE: &str = "config.toml";

/// Storybook storage paths container.
#[derive(Debug, Clone)]
pub struct StoryPaths {
    /// Root data directory (platform-specific).
    pub data_dir: PathBuf,
    /// Key-value store file.
    pub store_file: PathBuf,
    /// Configuration directory.
    pub config_dir: PathBuf,
    /// Configuration file.
    pub config_file: PathBuf,
}

impl StoryPaths {
    /// Create StoryPaths with automatic OS detection.
    pub fn new() -> Result<Self> {
        Ok(Self::from_dirs(storybook_data_dir()?, storybook_config_dir()?))
    }

    /// Create StoryPaths rooted in a single custom directory.
    pub fn from_root(root: PathBuf) -> Self {
        Self::from_dirs(root.clone(), root)
    }

    fn from_dirs(data_dir: PathBuf, config_dir: PathBuf) -> Self {
        Self {
            store_file: data_dir.join(STORE_FILE),
            config_file: config_dir.join(CONFIG_FILE),
            data_dir,
            config_dir,
        }
    }

    /// Ensure the data and config directories exist.
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.config_dir)?;
        debug!(data_dir = %self.data_dir.display(), "Storybook storage directories initialized");
        Ok(())
    }
}

fn dir_override(var: &str) -> Option<PathBuf> {
    match std::env::var(var) {
        Ok(val) if !val.is_empty() => {
            let path = PathBuf::from(val);
            debug!(path = %path.display(), "Using {} override", var);
            Some(path)
        }
        _ => None,
    }
}

/// Get the Storybook data directory based on the current OS.
pub fn storybook_data_dir() -> Result<PathBuf> {
    if let Some(path) = dir_override("STORYBOOK_DATA_DIR") {
        return Ok(path);
    }
    let base = dirs::data_dir().ok_or(StorageError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}

/// Get the Storybook configuration directory based on the current OS.
pub fn storybook_config_dir() -> Result<PathBuf> {
    if let Some(path) = dir_override("STORYBOOK_CONFIG_DIR") {
        return Ok(path);
    }
    let base = dirs::config_dir().ok_or(StorageError::HomeDirNotFound)?;
    Ok(base.join(APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_root() {
        let root = PathBuf::from("/tmp/storybook-test");
        let paths = StoryPaths::from_root(root.clone());

        assert_eq!(paths.data_dir, root);
        assert_eq!(paths.store_file, root.join("store.json"));
        assert_eq!(paths.config_file, root.join("config.toml"));
    }

    #[test]
    fn test_ensure_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let paths = StoryPaths::from_root(dir.path().join("nested").join("storybook"));

        paths.ensure_dirs().unwrap();
        assert!(paths.data_dir.is_dir());
        assert!(paths.config_dir.is_dir());
    }
}
