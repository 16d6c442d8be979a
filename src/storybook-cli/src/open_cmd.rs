//! Open command: decode a shared story.

use anyhow::{Context, Result};
use clap::Parser;

use storybook_protocol::StoryBook;
use storybook_share::{decode, token_from_input};
use tracing::info;

use crate::cli::AppContext;
use crate::styled_output::print_success;

const UNREADABLE_LINK: &str = "link does not contain a readable story";

/// Decode a share URL, fragment or token and print the story.
#[derive(Debug, Parser)]
pub struct OpenCommand {
    /// Share URL, `#/story/<token>` fragment or bare token
    #[arg(value_name = "URL|FRAGMENT|TOKEN")]
    pub input: String,

    /// Also make the story the saved story
    #[arg(long)]
    pub save: bool,

    /// Pretty-print the story JSON
    #[arg(long)]
    pub pretty: bool,
}

impl OpenCommand {
    pub async fn run(self, ctx: &AppContext) -> Result<()> {
        let story = open_story(&self.input).context(UNREADABLE_LINK)?;
        info!(title = %story.title, pages = story.pages.len(), "Opened shared story");

        let json = if self.pretty {
            serde_json::to_string_pretty(&story)?
        } else {
            serde_json::to_string(&story)?
        };
        println!("{json}");

        if self.save {
            ctx.stories()
                .save(&story)
                .context("Failed to save story")?;
            print_success(&format!("Saved \"{}\"", story.title));
        }
        Ok(())
    }
}

fn open_story(input: &str) -> Option<StoryBook> {
    token_from_input(input).and_then(|token| decode(&token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_protocol::StoryPage;
    use storybook_share::{encode, share_url};

    fn story() -> StoryBook {
        StoryBook::new("Test", vec![StoryPage::new(1, "Hello", "x")])
    }

    #[test]
    fn test_open_any_input_form() {
        let token = encode(&story()).unwrap();
        let url = share_url("https://app.example/books/", &story()).unwrap();

        assert_eq!(open_story(&url), Some(story()));
        assert_eq!(open_story(&format!("#/story/{token}")), Some(story()));
        assert_eq!(open_story(&format!("  {token}\n")), Some(story()));
    }

    #[test]
    fn test_open_unreadable() {
        assert_eq!(open_story(""), None);
        assert_eq!(open_story("https://app.example/#/home"), None);
        assert_eq!(open_story("####"), None);
    }
}
