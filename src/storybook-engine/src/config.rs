//! Engine configuration.
//!
//! Built once at startup from an optional TOML file plus environment
//! overrides, validated immediately, then passed to whatever needs it.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default model for story text.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Default model for illustrations.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Default illustration aspect ratio.
pub const DEFAULT_ASPECT_RATIO: &str = "1:1";

/// Default illustration MIME type.
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["STORYBOOK_API_KEY", "API_KEY"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "The API key is not set. Set STORYBOOK_API_KEY (or API_KEY) or add `api_key` to the config file."
    )]
    MissingApiKey,

    #[error("Config value `{field}` cannot be empty")]
    EmptyValue { field: &'static str },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Unvalidated config file contents. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub text_model: Option<String>,
    pub image_model: Option<String>,
    pub image_aspect_ratio: Option<String>,
    pub image_mime_type: Option<String>,
}

impl ConfigFile {
    /// Read a TOML config file. A missing file yields an empty config.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Validated engine configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub api_key: String,
    pub text_model: String,
    pub image_model: String,
    pub image_aspect_ratio: String,
    pub image_mime_type: String,
}

impl EngineConfig {
    /// Load from an optional config file, then apply process environment
    /// overrides, then validate.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_path {
            Some(path) => ConfigFile::from_path(path)?,
            None => ConfigFile::default(),
        };
        Self::from_sources(file, |name| std::env::var(name).ok())
    }

    /// Load from the process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Merge `file` with values from `env` (environment wins) and validate.
    pub fn from_sources(
        file: ConfigFile,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_key = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| non_empty(env(*name)))
            .or_else(|| non_empty(file.api_key))
            .ok_or(ConfigError::MissingApiKey)?;

        let config = Self {
            api_key: api_key.trim().to_string(),
            text_model: env("STORYBOOK_TEXT_MODEL")
                .or(file.text_model)
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            image_model: env("STORYBOOK_IMAGE_MODEL")
                .or(file.image_model)
                .unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            image_aspect_ratio: file
                .image_aspect_ratio
                .unwrap_or_else(|| DEFAULT_ASPECT_RATIO.to_string()),
            image_mime_type: file
                .image_mime_type
                .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("text_model", &self.text_model),
            ("image_model", &self.image_model),
            ("image_aspect_ratio", &self.image_aspect_ratio),
            ("image_mime_type", &self.image_mime_type),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue { field });
            }
        }
        Ok(())
    }

    /// The API key with all but its first four characters masked.
    pub fn redacted_api_key(&self) -> String {
        let visible: String = self.api_key.chars().take(4).collect();
        format!("{visible}****")
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("api_key", &self.redacted_api_key())
            .field("text_model", &self.text_model)
            .field("image_model", &self.image_model)
            .field("image_aspect_ratio", &self.image_aspect_ratio)
            .field("image_mime_type", &self.image_mime_type)
            .finish()
    }
}
