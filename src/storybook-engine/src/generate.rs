//! Story generation pipeline.
//!
//! One text request followed by one image request per page, awaited in
//! order. Progress messages are pushed to a [`ProgressSink`] as each step
//! starts.

use storybook_protocol::{RawStory, StoryBook, StoryPage, StoryRequest};
use tracing::{debug, info};

use crate::backend::{StoryBackend, parse_story_response};
use crate::prompt::{image_prompt, story_prompt};
use crate::{EngineError, Result};

/// Receives human-readable progress messages.
pub trait ProgressSink: Send + Sync {
    fn report(&self, message: &str);
}

impl<F> ProgressSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Sink that drops every message.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _message: &str) {}
}

/// Generate a complete storybook for `request`.
pub async fn generate_story_book(
    backend: &dyn StoryBackend,
    request: &StoryRequest,
    progress: &dyn ProgressSink,
) -> Result<StoryBook> {
    request.validate()?;

    progress.report("Crafting a magical story for you...");
    let content = generate_story_content(backend, request).await?;

    let total = content.pages.len();
    let mut pages = Vec::with_capacity(total);
    for (index, page) in content.pages.into_iter().enumerate() {
        let page_number = index + 1;
        progress.report(&format!(
            "Painting pictures for page {page_number} of {total}..."
        ));

        let image = backend
            .generate_image(&image_prompt(&page.image_prompt, request.theme))
            .await?;
        debug!(page = page_number, mime = %image.mime_type, "Illustration generated");

        pages.push(StoryPage::new(
            page_number as u32,
            page.paragraph,
            image.data_url(),
        ));
    }

    progress.report("Your storybook is ready!");
    info!(title = %content.title, pages = total, "Storybook generated");
    Ok(StoryBook::new(content.title, pages))
}

async fn generate_story_content(
    backend: &dyn StoryBackend,
    request: &StoryRequest,
) -> Result<RawStory> {
    let text = backend
        .generate_text(&story_prompt(request), &RawStory::response_schema())
        .await?;
    let story = parse_story_response(&text)?;
    if story.pages.is_empty() {
        return Err(EngineError::EmptyStory);
    }
    if story.pages.len() != request.page_count as usize {
        debug!(
            requested = request.page_count,
            received = story.pages.len(),
            "Text model returned a different page count"
        );
    }
    Ok(story)
}
