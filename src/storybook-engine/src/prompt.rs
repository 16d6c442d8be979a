//! Prompt wording for the text and image models.

use storybook_protocol::{StoryRequest, StoryTheme};

const IMAGE_STYLE: &str = "whimsical children's book illustration, vibrant colors, friendly characters, storybook style, digital art";

/// Prompt asking the text model for the whole story as JSON.
pub fn story_prompt(request: &StoryRequest) -> String {
    let theme = request.theme;
    format!(
        "Create a short children's story with a '{theme}' theme, based on the following idea: \"{}\".\n\
         The story must be exactly {} paragraphs long.\n\
         For each paragraph, also create a simple, descriptive prompt for an accompanying illustration \
         in a vibrant, whimsical, digital art style suitable for a children's book, fitting the '{theme}' theme.\n\
         Your response must be a JSON object.",
        request.prompt.trim(),
        request.page_count,
    )
}

/// Prompt for one page illustration.
pub fn image_prompt(page_prompt: &str, theme: StoryTheme) -> String {
    format!("{}, {theme} theme, {IMAGE_STYLE}", page_prompt.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_prompt_mentions_inputs() {
        let request = StoryRequest::new("  A robot who bakes  ")
            .with_theme(StoryTheme::SciFiAdventure)
            .with_page_count(4);
        let prompt = story_prompt(&request);

        assert!(prompt.contains("'Sci-Fi Adventure' theme"));
        assert!(prompt.contains("\"A robot who bakes\""));
        assert!(prompt.contains("exactly 4 paragraphs"));
        assert!(prompt.ends_with("Your response must be a JSON object."));
    }

    #[test]
    fn test_image_prompt() {
        assert_eq!(
            image_prompt("a squirrel on a branch", StoryTheme::Mystery),
            "a squirrel on a branch, Mystery theme, whimsical children's book illustration, \
             vibrant colors, friendly characters, storybook style, digital art"
        );
    }
}
