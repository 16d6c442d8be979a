//! Application session: which story is current and where it came from.

use storybook_protocol::{StoryBook, StoryRequest};
use storybook_share::{decode_fragment, share_url};
use storybook_storage::{KeyValueStore, StoryStore};
use tracing::{info, warn};

use crate::backend::StoryBackend;
use crate::generate::{ProgressSink, generate_story_book};
use crate::{EngineError, Result};

/// Where the current story was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorySource {
    SharedLink,
    LocalStorage,
    Generated,
}

/// What the application shows right after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupView {
    Home,
    Viewing {
        story: StoryBook,
        source: StorySource,
    },
}

/// Holds the current story and keeps the persisted copy in sync with it.
#[derive(Debug)]
pub struct StorySession<S> {
    stories: StoryStore<S>,
    current: Option<StoryBook>,
}

impl<S: KeyValueStore> StorySession<S> {
    pub fn new(store: S) -> Self {
        Self {
            stories: StoryStore::new(store),
            current: None,
        }
    }

    /// The story currently being viewed.
    pub fn current(&self) -> Option<&StoryBook> {
        self.current.as_ref()
    }

    /// Decide the initial view.
    ///
    /// A readable story in the `#/story/<token>` fragment wins and replaces
    /// the saved story; otherwise the saved story is restored; otherwise the
    /// home view is shown. Never fails: unreadable state falls through to
    /// the next option.
    pub fn bootstrap(&mut self, fragment: Option<&str>) -> StartupView {
        if let Some(story) = fragment.and_then(decode_fragment::<StoryBook>) {
            info!(title = %story.title, "Opened shared story");
            self.replace_current(story.clone());
            return StartupView::Viewing {
                story,
                source: StorySource::SharedLink,
            };
        }

        match self.stories.load() {
            Ok(Some(story)) => {
                self.current = Some(story.clone());
                StartupView::Viewing {
                    story,
                    source: StorySource::LocalStorage,
                }
            }
            Ok(None) => StartupView::Home,
            Err(e) => {
                warn!(error = %e, "Failed to load story from local storage");
                if let Err(e) = self.stories.clear() {
                    warn!(error = %e, "Failed to clear unreadable story");
                }
                StartupView::Home
            }
        }
    }

    /// Generate a new story and make it current.
    ///
    /// The previous story is dropped from view first; on failure nothing is
    /// current and the saved copy is left as it was.
    pub async fn generate(
        &mut self,
        backend: &dyn StoryBackend,
        request: &StoryRequest,
        progress: &dyn ProgressSink,
    ) -> Result<&StoryBook> {
        self.current = None;
        progress.report("Warming up the magic ink...");

        let story = generate_story_book(backend, request, progress).await?;
        self.replace_current(story);
        self.current.as_ref().ok_or(EngineError::NoStory)
    }

    /// Share URL for the current story relative to the app location `base`.
    pub fn share_url(&self, base: &str) -> Result<String> {
        let story = self.current.as_ref().ok_or(EngineError::NoStory)?;
        Ok(share_url(base, story)?)
    }

    /// Drop the current story and its saved copy.
    pub fn start_new(&mut self) -> Result<()> {
        self.current = None;
        self.stories.clear()?;
        Ok(())
    }

    /// Make `story` current and save it. A failed save is logged only.
    fn replace_current(&mut self, story: StoryBook) {
        if let Err(e) = self.stories.save(&story) {
            warn!(error = %e, "Failed to save story to local storage");
        }
        self.current = Some(story);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::ScriptedBackend;
    use crate::generate::NoProgress;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use storybook_protocol::StoryPage;
    use storybook_share::{encode, token_from_url};
    use storybook_storage::{MemoryStore, STORY_KEY};

    fn shared() -> StoryBook {
        StoryBook::new("Shared", vec![StoryPage::new(1, "From a link", "x")])
    }

    fn saved() -> StoryBook {
        StoryBook::new("Saved", vec![StoryPage::new(1, "From disk", "y")])
    }

    fn session_with_saved() -> (Arc<MemoryStore>, StorySession<Arc<MemoryStore>>) {
        let kv = Arc::new(MemoryStore::new());
        StoryStore::new(Arc::clone(&kv)).save(&saved()).unwrap();
        let session = StorySession::new(Arc::clone(&kv));
        (kv, session)
    }

    #[test]
    fn test_shared_link_takes_precedence() {
        let (kv, mut session) = session_with_saved();
        let fragment = format!("#/story/{}", encode(&shared()).unwrap());

        let view = session.bootstrap(Some(&fragment));

        assert_eq!(
            view,
            StartupView::Viewing {
                story: shared(),
                source: StorySource::SharedLink
            }
        );
        assert_eq!(session.current(), Some(&shared()));
        assert_eq!(StoryStore::new(kv).load().unwrap(), Some(shared()));
    }

    #[test]
    fn test_bad_link_falls_back_to_saved_story() {
        let (_kv, mut session) = session_with_saved();

        let view = session.bootstrap(Some("#/story/####"));

        assert_eq!(
            view,
            StartupView::Viewing {
                story: saved(),
                source: StorySource::LocalStorage
            }
        );
    }

    #[test]
    fn test_nothing_saved_shows_home() {
        let mut session = StorySession::new(MemoryStore::new());
        assert_eq!(session.bootstrap(None), StartupView::Home);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn test_corrupt_saved_story_shows_home() {
        let kv = Arc::new(MemoryStore::new());
        kv.set(STORY_KEY, "][").unwrap();
        let mut session = StorySession::new(Arc::clone(&kv));

        assert_eq!(session.bootstrap(None), StartupView::Home);
        assert_eq!(kv.get(STORY_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_store_file_shows_home() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{broken").unwrap();

        let mut session = StorySession::new(storybook_storage::FileStore::new(&path));
        assert_eq!(session.bootstrap(None), StartupView::Home);
    }

    #[test]
    fn test_share_url_roundtrip() {
        let (_kv, mut session) = session_with_saved();
        assert!(matches!(
            StorySession::new(MemoryStore::new()).share_url("https://app.example/"),
            Err(EngineError::NoStory)
        ));

        session.bootstrap(None);
        let url = session.share_url("https://app.example/").unwrap();
        let token = token_from_url(&url).unwrap();

        let mut receiver = StorySession::new(MemoryStore::new());
        let view = receiver.bootstrap(Some(&format!("#/story/{token}")));
        assert_eq!(
            view,
            StartupView::Viewing {
                story: saved(),
                source: StorySource::SharedLink
            }
        );
    }

    #[test]
    fn test_start_new_clears_saved_story() {
        let (kv, mut session) = session_with_saved();
        session.bootstrap(None);

        session.start_new().unwrap();

        assert_eq!(session.current(), None);
        assert_eq!(kv.get(STORY_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_generate_persists_story() {
        let kv = Arc::new(MemoryStore::new());
        let mut session = StorySession::new(Arc::clone(&kv));
        let backend = ScriptedBackend::with_story(
            r#"{"title":"New","pages":[{"paragraph":"p1","image_prompt":"i1"}]}"#,
        );

        let story = session
            .generate(&backend, &StoryRequest::new("idea"), &NoProgress)
            .await
            .unwrap()
            .clone();

        assert_eq!(story.title, "New");
        assert_eq!(StoryStore::new(kv).load().unwrap(), Some(story));
    }

    #[tokio::test]
    async fn test_failed_generation_keeps_saved_copy() {
        let (kv, mut session) = session_with_saved();
        session.bootstrap(None);
        let backend = ScriptedBackend::with_story(r#"{"title":"Empty","pages":[]}"#);

        let result = session
            .generate(&backend, &StoryRequest::new("idea"), &NoProgress)
            .await;

        assert!(matches!(result, Err(EngineError::EmptyStory)));
        assert_eq!(session.current(), None);
        assert_eq!(StoryStore::new(kv).load().unwrap(), Some(saved()));
    }
}
