//! Browser session
//!
//! Owns a reference to the loaded store (if any) and the current filter, and
//! turns each [`BrowseAction`] into one filter-and-render cycle.

use std::time::Duration;

use tracing::{debug, error, warn};

use super::desktop::{search_url, ClipboardSink, Launcher, SystemClipboard, SystemLauncher};
use super::surface::{BrowseAction, InputSource, Notice, Renderer};
use crate::config::Settings;
use crate::error::GlossaryResult;
use crate::models::{Category, Entry};
use crate::search::Filter;
use crate::storage::EntryStore;

/// Help text shown for [`BrowseAction::Help`] in line mode
pub const LINE_HELP: &str = "Type text to search. Commands: :root :prefix :suffix :all \
                             :open N :copy :help :quit";

/// Whether the session should keep running after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive browsing state over an entry store
pub struct Browser<'a, L = SystemLauncher, C = SystemClipboard> {
    store: Option<&'a EntryStore>,
    settings: &'a Settings,
    filter: Filter,
    launcher: L,
    clipboard: C,
}

impl<'a> Browser<'a> {
    /// Create a browser using the system browser and clipboard
    pub fn with_system(store: Option<&'a EntryStore>, settings: &'a Settings) -> Self {
        Self::new(store, settings, SystemLauncher, SystemClipboard::new())
    }
}

impl<'a, L: Launcher, C: ClipboardSink> Browser<'a, L, C> {
    /// Create a browser; `store` is `None` when loading failed
    pub fn new(store: Option<&'a EntryStore>, settings: &'a Settings, launcher: L, clipboard: C) -> Self {
        Self {
            store,
            settings,
            filter: Filter::All,
            launcher,
            clipboard,
        }
    }

    /// The active filter
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Whether a store is available
    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    /// Number of entries in the store, zero when nothing is loaded
    pub fn entry_count(&self) -> usize {
        self.store.map(EntryStore::len).unwrap_or(0)
    }

    /// The entries the current filter lets through
    pub fn visible(&self) -> Vec<&'a Entry> {
        match self.store {
            Some(store) => self.filter.apply(store.entries()),
            None => Vec::new(),
        }
    }

    /// Switch to a free-text search
    pub fn search(&mut self, query: impl Into<String>) {
        self.filter = Filter::Query(query.into());
    }

    /// Switch to a category tab
    pub fn select_category(&mut self, category: Category) {
        self.filter = Filter::Category(category);
    }

    /// Clear any filter
    pub fn show_all(&mut self) {
        self.filter = Filter::All;
    }

    /// Web search URL for an entry
    pub fn url_for(&self, entry: &Entry) -> String {
        search_url(self.settings, entry)
    }

    /// Open the web search for the n-th visible entry
    pub fn open_visible(&mut self, index: usize) -> Notice {
        let Some(entry) = self.visible().get(index).copied() else {
            return Notice::error(format!("No entry #{}", index + 1));
        };

        let url = self.url_for(entry);
        debug!(term = %entry.term, %url, "opening web search");
        match self.launcher.open_url(&url) {
            Ok(()) => Notice::info(format!("Opened search for {}", entry.term)),
            Err(e) => {
                warn!(error = %e, "failed to open web search");
                Notice::error(e.to_string())
            }
        }
    }

    /// Copy the configured contact address to the clipboard
    pub fn copy_contact(&mut self) -> GlossaryResult<()> {
        let email = self.settings.contact_email.clone();
        self.clipboard.copy_text(&email).inspect_err(|e| {
            error!(error = %e, "failed to copy email");
        })
    }

    /// Apply one action and push the outcome to `renderer`
    pub fn handle<R: Renderer + ?Sized>(
        &mut self,
        action: BrowseAction,
        renderer: &mut R,
    ) -> GlossaryResult<Flow> {
        match action {
            BrowseAction::Search(query) => {
                self.search(query);
                renderer.render(&self.visible())?;
            }
            BrowseAction::SelectCategory(category) => {
                self.select_category(category);
                renderer.render(&self.visible())?;
            }
            BrowseAction::ShowAll => {
                self.show_all();
                renderer.render(&self.visible())?;
            }
            BrowseAction::Activate(index) => {
                let notice = self.open_visible(index);
                renderer.notify(notice)?;
            }
            BrowseAction::CopyContact => match self.copy_contact() {
                Ok(()) => {
                    let duration = Duration::from_secs(self.settings.confirmation_secs);
                    renderer.contact_copied(duration)?;
                }
                Err(e) => renderer.notify(Notice::error(format!("Failed to copy email: {}", e)))?,
            },
            BrowseAction::Help => renderer.notify(Notice::info(LINE_HELP))?,
            BrowseAction::Unknown(input) => {
                renderer.notify(Notice::error(format!("Unknown command: {}", input)))?
            }
            BrowseAction::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Draw the initial state: placeholder and the current visible set
    pub fn start<R: Renderer + ?Sized>(&self, renderer: &mut R) -> GlossaryResult<()> {
        renderer.set_entry_count(self.entry_count())?;
        renderer.render(&self.visible())
    }

    /// Run until the input is exhausted or the user quits
    pub fn run<I, R>(&mut self, input: &mut I, renderer: &mut R) -> GlossaryResult<()>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        self.start(renderer)?;

        while let Some(action) = input.next_action()? {
            if self.handle(action, renderer)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// The launcher, mainly for inspection in tests
    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// The clipboard, mainly for inspection in tests
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::browser::surface::{NoticeKind, CONTACT_COPIED_LABEL};
    use crate::error::GlossaryError;
    use std::collections::VecDeque;

    #[derive(Default)]
    pub struct RecordingLauncher {
        pub opened: Vec<String>,
        pub fail: bool,
    }

    impl Launcher for RecordingLauncher {
        fn open_url(&mut self, url: &str) -> GlossaryResult<()> {
            if self.fail {
                return Err(GlossaryError::Launch {
                    url: url.to_string(),
                    reason: "no browser".into(),
                });
            }
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingClipboard {
        pub copied: Vec<String>,
        pub fail: bool,
    }

    impl ClipboardSink for RecordingClipboard {
        fn copy_text(&mut self, text: &str) -> GlossaryResult<()> {
            if self.fail {
                return Err(GlossaryError::Clipboard("Clipboard not available".into()));
            }
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct RecordingRenderer {
        pub frames: Vec<Vec<String>>,
        pub count: Option<usize>,
        pub notices: Vec<Notice>,
    }

    impl Renderer for RecordingRenderer {
        fn render(&mut self, entries: &[&Entry]) -> GlossaryResult<()> {
            self.frames
                .push(entries.iter().map(|e| e.term.clone()).collect());
            Ok(())
        }

        fn set_entry_count(&mut self, count: usize) -> GlossaryResult<()> {
            self.count = Some(count);
            Ok(())
        }

        fn notify(&mut self, notice: Notice) -> GlossaryResult<()> {
            self.notices.push(notice);
            Ok(())
        }
    }

    struct ScriptedInput(VecDeque<BrowseAction>);

    impl InputSource for ScriptedInput {
        fn next_action(&mut self) -> GlossaryResult<Option<BrowseAction>> {
            Ok(self.0.pop_front())
        }
    }

    pub fn sample_store() -> EntryStore {
        EntryStore::from_entries(vec![
            Entry::new("bio-", "Root")
                .with_origin("Greek")
                .with_meaning("life"),
            Entry::new("-ology", "Suffix")
                .with_origin("Greek")
                .with_meaning("study of"),
            Entry::new("pre-", "Prefix")
                .with_origin("Latin")
                .with_meaning("before")
                .with_examples(["preview"]),
        ])
        .unwrap()
    }

    fn browser<'a>(
        store: Option<&'a EntryStore>,
        settings: &'a Settings,
    ) -> Browser<'a, RecordingLauncher, RecordingClipboard> {
        Browser::new(
            store,
            settings,
            RecordingLauncher::default(),
            RecordingClipboard::default(),
        )
    }

    #[test]
    fn test_run_renders_each_filter_change() {
        let store = sample_store();
        let settings = Settings::default();
        let mut browser = browser(Some(&store), &settings);
        let mut renderer = RecordingRenderer::default();
        let mut input = ScriptedInput(VecDeque::from(vec![
            BrowseAction::Search("biology".into()),
            BrowseAction::SelectCategory(Category::Prefix),
            BrowseAction::Search("zzz".into()),
            BrowseAction::ShowAll,
            BrowseAction::Quit,
            BrowseAction::Search("never".into()),
        ]));

        browser.run(&mut input, &mut renderer).unwrap();

        assert_eq!(renderer.count, Some(3));
        assert_eq!(
            renderer.frames,
            vec![
                vec!["-ology", "bio-", "pre-"],
                vec!["-ology", "bio-"],
                vec!["pre-"],
                vec![],
                vec!["-ology", "bio-", "pre-"],
            ]
        );
    }

    #[test]
    fn test_unloaded_store_shows_nothing() {
        let settings = Settings::default();
        let mut browser = browser(None, &settings);
        let mut renderer = RecordingRenderer::default();

        browser.start(&mut renderer).unwrap();
        browser
            .handle(BrowseAction::Search("".into()), &mut renderer)
            .unwrap();
        browser
            .handle(BrowseAction::SelectCategory(Category::Root), &mut renderer)
            .unwrap();

        assert!(!browser.is_loaded());
        assert_eq!(renderer.count, Some(0));
        assert!(renderer.frames.iter().all(|frame| frame.is_empty()));
    }

    #[test]
    fn test_activate_opens_search_for_visible_entry() {
        let store = sample_store();
        let settings = Settings::default();
        let mut browser = browser(Some(&store), &settings);
        let mut renderer = RecordingRenderer::default();

        browser
            .handle(BrowseAction::SelectCategory(Category::Suffix), &mut renderer)
            .unwrap();
        browser
            .handle(BrowseAction::Activate(0), &mut renderer)
            .unwrap();

        assert_eq!(
            browser.launcher().opened,
            vec!["https://www.google.com/search?q=-ology%20Suffix"]
        );
        assert_eq!(renderer.notices[0].kind, NoticeKind::Info);
    }

    #[test]
    fn test_activate_out_of_range() {
        let store = sample_store();
        let settings = Settings::default();
        let mut browser = browser(Some(&store), &settings);
        let mut renderer = RecordingRenderer::default();

        browser
            .handle(BrowseAction::Activate(7), &mut renderer)
            .unwrap();

        assert!(browser.launcher().opened.is_empty());
        assert_eq!(renderer.notices[0].kind, NoticeKind::Error);
        assert_eq!(renderer.notices[0].message, "No entry #8");
    }

    #[test]
    fn test_launch_failure_is_reported_not_fatal() {
        let store = sample_store();
        let settings = Settings::default();
        let mut browser = Browser::new(
            Some(&store),
            &settings,
            RecordingLauncher {
                fail: true,
                ..Default::default()
            },
            RecordingClipboard::default(),
        );
        let mut renderer = RecordingRenderer::default();

        let flow = browser
            .handle(BrowseAction::Activate(0), &mut renderer)
            .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert_eq!(renderer.notices[0].kind, NoticeKind::Error);
    }

    #[test]
    fn test_copy_contact_confirms_for_configured_duration() {
        let store = sample_store();
        let settings = Settings::default();
        let mut browser = browser(Some(&store), &settings);
        let mut renderer = RecordingRenderer::default();

        browser
            .handle(BrowseAction::CopyContact, &mut renderer)
            .unwrap();

        assert_eq!(browser.clipboard().copied, vec!["hana@kaloudis.net"]);
        assert_eq!(renderer.notices[0].message, CONTACT_COPIED_LABEL);
        assert_eq!(renderer.notices[0].duration, Duration::from_secs(2));
        // Filtering is untouched by the clipboard action
        assert!(renderer.frames.is_empty());
        assert_eq!(browser.filter(), &Filter::All);
    }

    #[test]
    fn test_copy_contact_failure() {
        let settings = Settings::default();
        let mut browser = Browser::new(
            None,
            &settings,
            RecordingLauncher::default(),
            RecordingClipboard {
                fail: true,
                ..Default::default()
            },
        );
        let mut renderer = RecordingRenderer::default();

        browser
            .handle(BrowseAction::CopyContact, &mut renderer)
            .unwrap();

        assert_eq!(renderer.notices[0].kind, NoticeKind::Error);
        assert!(renderer.notices[0].message.starts_with("Failed to copy email"));
    }

    #[test]
    fn test_unknown_and_help() {
        let settings = Settings::default();
        let mut browser = browser(None, &settings);
        let mut renderer = RecordingRenderer::default();

        browser
            .handle(BrowseAction::Unknown(":frobnicate".into()), &mut renderer)
            .unwrap();
        browser.handle(BrowseAction::Help, &mut renderer).unwrap();

        assert_eq!(renderer.notices[0].message, "Unknown command: :frobnicate");
        assert_eq!(renderer.notices[1].message, LINE_HELP);
    }
}
