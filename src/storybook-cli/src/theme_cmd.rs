//! Theme command: show or set the light/dark preference.

use anyhow::{Context, Result};
use clap::Parser;

use storybook_protocol::ThemePreference;

use crate::cli::AppContext;
use crate::styled_output::print_success;

/// Show or set the light/dark preference.
#[derive(Debug, Parser)]
pub struct ThemeCommand {
    /// New preference (light, dark or system)
    #[arg(value_name = "PREFERENCE", value_parser = parse_preference)]
    pub preference: Option<ThemePreference>,
}

impl ThemeCommand {
    pub async fn run(self, ctx: &AppContext) -> Result<()> {
        let themes = ctx.themes();
        match self.preference {
            Some(preference) => {
                themes
                    .set(preference)
                    .context("Failed to save theme preference")?;
                print_success(&format!("Theme set to {preference}"));
            }
            None => {
                let preference = themes.get().context("Failed to read theme preference")?;
                println!("{preference}");
            }
        }
        Ok(())
    }
}

fn parse_preference(value: &str) -> Result<ThemePreference, String> {
    match value.trim().to_lowercase().as_str() {
        "light" => Ok(ThemePreference::Light),
        "dark" => Ok(ThemePreference::Dark),
        "system" => Ok(ThemePreference::System),
        other => Err(format!(
            "unknown theme '{other}' (expected light, dark or system)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preference() {
        assert_eq!(parse_preference("Dark"), Ok(ThemePreference::Dark));
        assert_eq!(parse_preference("light"), Ok(ThemePreference::Light));
        assert_eq!(parse_preference("system"), Ok(ThemePreference::System));
        assert!(parse_preference("sepia").is_err());
    }
}
