//! Story themes and display appearance preferences.

use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Narrative theme applied to both the story text and its illustrations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum StoryTheme {
    #[serde(rename = "Fairy Tale")]
    #[strum(serialize = "Fairy Tale")]
    FairyTale,

    #[serde(rename = "Sci-Fi Adventure")]
    #[strum(serialize = "Sci-Fi Adventure")]
    SciFiAdventure,

    #[serde(rename = "Mystery")]
    #[strum(serialize = "Mystery")]
    Mystery,

    #[default]
    #[serde(rename = "Whimsical Wonderland")]
    #[strum(serialize = "Whimsical Wonderland")]
    WhimsicalWonderland,
}

impl StoryTheme {
    /// All themes in display order.
    pub const ALL: [StoryTheme; 4] = [
        StoryTheme::FairyTale,
        StoryTheme::SciFiAdventure,
        StoryTheme::Mystery,
        StoryTheme::WhimsicalWonderland,
    ];

    /// Parse from a display label or a loose spelling (case-insensitive,
    /// ignoring spaces, dashes and underscores).
    pub fn from_str_loose(s: &str) -> Option<StoryTheme> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "fairytale" => Some(StoryTheme::FairyTale),
            "scifiadventure" | "scifi" => Some(StoryTheme::SciFiAdventure),
            "mystery" => Some(StoryTheme::Mystery),
            "whimsicalwonderland" | "whimsical" => Some(StoryTheme::WhimsicalWonderland),
            _ => None,
        }
    }
}

/// User's light/dark preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the platform setting.
    #[default]
    System,
}

impl ThemePreference {
    /// Interpret a stored value. Anything other than `light` or `dark`
    /// falls back to [`ThemePreference::System`].
    pub fn from_stored(value: Option<&str>) -> ThemePreference {
        match value {
            Some("light") => ThemePreference::Light,
            Some("dark") => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }

    /// Value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    /// Effective appearance given whether the platform prefers dark mode.
    pub fn resolve(&self, prefers_dark: bool) -> Appearance {
        match self {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::System if prefers_dark => Appearance::Dark,
            ThemePreference::System => Appearance::Light,
        }
    }
}

/// Concrete appearance after resolving a [`ThemePreference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Appearance {
    Light,
    Dark,
}
