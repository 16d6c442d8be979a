//! Rendered storybook documents.

use serde::{Deserialize, Serialize};

/// One illustrated page of a storybook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryPage {
    /// 1-based position of the page in the book.
    pub page_number: u32,
    /// Paragraph shown on the page.
    pub text: String,
    /// Illustration reference (usually a `data:` URL).
    pub image_url: String,
}

impl StoryPage {
    pub fn new(page_number: u32, text: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
            image_url: image_url.into(),
        }
    }
}

/// A complete generated storybook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryBook {
    pub title: String,
    pub pages: Vec<StoryPage>,
}

impl StoryBook {
    pub fn new(title: impl Into<String>, pages: Vec<StoryPage>) -> Self {
        Self {
            title: title.into(),
            pages,
        }
    }

    /// Number of pages in the book.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the book has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// File name used when the book is exported as PDF.
    ///
    /// Every UTF-16 code unit outside `[A-Za-z0-9]` becomes `_` and the
    /// result is lower-cased, e.g. `"The Brave Squirrel!"` ->
    /// `the_brave_squirrel__storybook.pdf`. Characters outside the BMP
    /// therefore turn into two underscores, as in the web client.
    pub fn pdf_file_name(&self) -> String {
        let mut safe_title = String::with_capacity(self.title.len());
        for c in self.title.chars() {
            if c.is_ascii_alphanumeric() {
                safe_title.push(c.to_ascii_lowercase());
            } else {
                safe_title.extend(std::iter::repeat_n('_', c.len_utf16()));
            }
        }
        format!("{safe_title}_storybook.pdf")
    }

    /// Footer label shown under a page, e.g. `Page 2 / 5`.
    pub fn page_label(&self, page: &StoryPage) -> String {
        format!("Page {} / {}", page.page_number, self.pages.len())
    }
}
