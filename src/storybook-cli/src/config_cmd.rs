//! Config command: validate the engine configuration.

use anyhow::{Context, Result};
use clap::Parser;

use storybook_engine::EngineConfig;

use crate::cli::AppContext;
use crate::styled_output::print_success;

/// Validate and print the engine configuration with the API key redacted.
#[derive(Debug, Parser)]
pub struct ConfigCommand {}

impl ConfigCommand {
    pub async fn run(self, ctx: &AppContext) -> Result<()> {
        let config_file = &ctx.paths.config_file;
        let config = EngineConfig::load(Some(config_file))
            .context("Invalid engine configuration")?;

        println!("config_file        = {}", config_file.display());
        println!("api_key            = {}", config.redacted_api_key());
        println!("text_model         = {}", config.text_model);
        println!("image_model        = {}", config.image_model);
        println!("image_aspect_ratio = {}", config.image_aspect_ratio);
        println!("image_mime_type    = {}", config.image_mime_type);
        print_success("Configuration is valid");
        Ok(())
    }
}
