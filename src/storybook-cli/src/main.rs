//! Storybook CLI - Main entry point.
//!
//! Story JSON and share URLs are written to stdout; logs and status
//! messages go to stderr.

use clap::Parser;
use std::process::ExitCode;

use storybook_cli::cli::{Cli, dispatch_command};
use storybook_cli::styled_output::print_error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_level = std::env::var("STORYBOOK_LOG_LEVEL").ok();
    let log_level = cli.effective_log_level(env_level.as_deref());

    let filter_str = if std::env::var("RUST_LOG").is_ok() {
        format!(
            "error,storybook_cli={0},storybook_engine={0},storybook_share={0},storybook_storage={0}",
            log_level.as_filter_str()
        )
    } else {
        log_level.as_filter_str().to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(&filter_str)
        .with_writer(std::io::stderr)
        .init();

    match dispatch_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
