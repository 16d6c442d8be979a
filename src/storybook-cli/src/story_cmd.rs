//! Commands for the saved story.

use anyhow::{Context, Result, bail};
use clap::Parser;

use storybook_protocol::StoryBook;

use crate::cli::AppContext;
use crate::styled_output::{print_info, print_success, print_warning};

/// Shown when a saved entry exists but no longer reads as a story.
pub const DISCARDED_STORY: &str = "Discarded an unreadable saved story";

/// Print the saved story.
#[derive(Debug, Parser)]
pub struct ShowCommand {
    /// Print a readable page-by-page summary instead of JSON
    #[arg(long)]
    pub summary: bool,
}

impl ShowCommand {
    pub async fn run(self, ctx: &AppContext) -> Result<()> {
        let had_entry = ctx.has_saved_entry();
        let Some(story) = ctx.stories().load().context("Failed to load saved story")? else {
            if had_entry {
                print_warning(DISCARDED_STORY);
            }
            bail!("No saved story");
        };

        if self.summary {
            print!("{}", summarize(&story));
        } else {
            println!("{}", serde_json::to_string_pretty(&story)?);
        }
        Ok(())
    }
}

/// Remove the saved story.
#[derive(Debug, Parser)]
pub struct ClearCommand {}

impl ClearCommand {
    pub async fn run(self, ctx: &AppContext) -> Result<()> {
        if !ctx.has_saved_entry() {
            print_info("No saved story to remove");
            return Ok(());
        }
        ctx.session()
            .start_new()
            .context("Failed to remove saved story")?;
        print_success("Saved story removed");
        Ok(())
    }
}

fn summarize(story: &StoryBook) -> String {
    let mut out = format!("{}\n", story.title);
    for page in &story.pages {
        out.push_str(&format!("\n{}\n{}\n", story.page_label(page), page.text));
    }
    out.push_str(&format!("\nPDF: {}\n", story.pdf_file_name()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storybook_protocol::StoryPage;

    #[test]
    fn test_summary() {
        let story = StoryBook::new(
            "The Brave Squirrel",
            vec![
                StoryPage::new(1, "Sam was scared.", "a"),
                StoryPage::new(2, "Sam climbed.", "b"),
            ],
        );

        assert_eq!(
            summarize(&story),
            "The Brave Squirrel\n\
             \nPage 1 / 2\nSam was scared.\n\
             \nPage 2 / 2\nSam climbed.\n\
             \nPDF: the_brave_squirrel_storybook.pdf\n"
        );
    }
}
