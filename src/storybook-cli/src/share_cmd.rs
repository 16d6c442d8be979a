//! Share command: turn a story into a share URL.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Read;
use std::path::{Path, PathBuf};

use storybook_engine::StartupView;
use storybook_protocol::StoryBook;

use crate::cli::AppContext;
use crate::story_cmd::DISCARDED_STORY;
use crate::styled_output::{print_success, print_warning};

/// Application location used when no base URL is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5173/";

/// Print the share URL for a story.
#[derive(Debug, Parser)]
pub struct ShareCommand {
    /// Story JSON file ("-" or omitted reads stdin)
    #[arg(value_name = "FILE", conflicts_with = "stored")]
    pub file: Option<PathBuf>,

    /// Application URL the share link points at
    #[arg(
        long = "base-url",
        value_name = "URL",
        env = "STORYBOOK_BASE_URL",
        default_value = DEFAULT_BASE_URL
    )]
    pub base_url: String,

    /// Share the saved story instead of reading one
    #[arg(long)]
    pub stored: bool,
}

impl ShareCommand {
    pub async fn run(self, ctx: &AppContext) -> Result<()> {
        let url = if self.stored {
            let had_entry = ctx.has_saved_entry();
            let mut session = ctx.session();
            if let StartupView::Home = session.bootstrap(None) {
                if had_entry {
                    print_warning(DISCARDED_STORY);
                }
                bail!("No saved story to share");
            }
            session
                .share_url(&self.base_url)
                .context("Failed to create share link")?
        } else {
            let story = read_story(self.file.as_deref())?;
            storybook_share::share_url(&self.base_url, &story)
                .context("Failed to create share link")?
        };

        println!("{url}");
        print_success("Share link created");
        Ok(())
    }
}

/// Read a story from `path`, or from stdin when `path` is absent or `-`.
fn read_story(path: Option<&Path>) -> Result<StoryBook> {
    let (content, source) = match path {
        Some(path) if path != Path::new("-") => (
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?,
            path.display().to_string(),
        ),
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read story from stdin")?;
            (content, "stdin".to_string())
        }
    };
    serde_json::from_str(&content).with_context(|| format!("{source} does not contain a valid story"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_story_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.json");
        std::fs::write(
            &path,
            r#"{"title":"Test","pages":[{"pageNumber":1,"text":"Hello","imageUrl":"x"}]}"#,
        )
        .unwrap();

        let story = read_story(Some(&path)).unwrap();
        assert_eq!(story.title, "Test");
        assert_eq!(story.pages[0].text, "Hello");
    }

    #[test]
    fn test_read_story_rejects_other_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.json");
        std::fs::write(&path, r#"{"name":"not a story"}"#).unwrap();

        let err = read_story(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("does not contain a valid story"));
    }
}
