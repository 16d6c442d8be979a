//! Storybook CLI library module.
//!
//! - `cli/` - Argument parsing, shared context and command dispatch
//! - `*_cmd.rs` - Individual command implementations
//! - `styled_output` - Status messages on stderr

pub mod cli;
pub mod styled_output;

pub mod config_cmd;
pub mod open_cmd;
pub mod share_cmd;
pub mod story_cmd;
pub mod theme_cmd;
