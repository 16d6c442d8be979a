//! CLI argument structures.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config_cmd::ConfigCommand;
use crate::open_cmd::OpenCommand;
use crate::share_cmd::ShareCommand;
use crate::story_cmd::{ClearCommand, ShowCommand};
use crate::theme_cmd::ThemeCommand;

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Storybook - share and open AI-generated storybooks
#[derive(Debug, Parser)]
#[command(name = "storybook")]
#[command(author, version, about = "Storybook - share and open AI-generated storybooks", long_about = None)]
pub struct Cli {
    /// Enable verbose output (same as --log-level debug)
    #[arg(long = "verbose", short = 'v', global = true)]
    pub verbose: bool,

    /// Set log verbosity level (error, warn, info, debug, trace)
    #[arg(long = "log-level", short = 'L', value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the saved story and preferences
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Engine configuration file
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level: `--verbose`, then `--log-level`, then
    /// `STORYBOOK_LOG_LEVEL`, then the default.
    pub fn effective_log_level(&self, env_level: Option<&str>) -> LogLevel {
        if self.verbose {
            return LogLevel::Debug;
        }
        self.log_level
            .or_else(|| env_level.and_then(LogLevel::from_str_loose))
            .unwrap_or_default()
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the share URL for a story
    Share(ShareCommand),

    /// Decode a share URL, fragment or token and print the story
    Open(OpenCommand),

    /// Print the saved story
    Show(ShowCommand),

    /// Remove the saved story
    Clear(ClearCommand),

    /// Show or set the light/dark preference
    Theme(ThemeCommand),

    /// Validate and print the engine configuration
    Config(ConfigCommand),
}
