//! Presentation capabilities
//!
//! The browser never touches a terminal directly. It reads [`BrowseAction`]s
//! from an [`InputSource`] and hands filtered entries to a [`Renderer`].

use std::time::Duration;

use crate::error::GlossaryResult;
use crate::models::{Category, Entry};

/// Label of the contact button while idle
pub const CONTACT_IDLE_LABEL: &str = "Something missing?";

/// Label of the contact button after a successful copy
pub const CONTACT_COPIED_LABEL: &str = "Copied! Now shoot me an email.";

/// Something the user asked the browser to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// The search text changed; carries the full current text
    Search(String),
    /// A category tab was chosen
    SelectCategory(Category),
    /// Drop any filter
    ShowAll,
    /// Open the web search for the n-th visible entry (zero-based)
    Activate(usize),
    /// Copy the contact address
    CopyContact,
    /// Show usage help
    Help,
    /// Input that could not be understood
    Unknown(String),
    /// End the session
    Quit,
}

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    pub duration: Duration,
}

impl Notice {
    fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration: Duration::from_secs(3),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Error)
    }

    /// Set how long the notice stays visible
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Placeholder text for the search field
pub fn search_placeholder(count: usize) -> String {
    format!("Search {} terms...", count)
}

/// A surface that displays entries
pub trait Renderer {
    /// Replace whatever is displayed with `entries`; an empty slice shows
    /// "No entries found."
    fn render(&mut self, entries: &[&Entry]) -> GlossaryResult<()>;

    /// Update the search placeholder for the current store size
    fn set_entry_count(&mut self, count: usize) -> GlossaryResult<()>;

    /// Show a transient message
    fn notify(&mut self, notice: Notice) -> GlossaryResult<()>;

    /// The contact address was copied; show the confirmation for `duration`
    fn contact_copied(&mut self, duration: Duration) -> GlossaryResult<()> {
        self.notify(Notice::success(CONTACT_COPIED_LABEL).with_duration(duration))
    }
}

/// A source of user actions
pub trait InputSource {
    /// The next action, or `None` when input is exhausted
    fn next_action(&mut self) -> GlossaryResult<Option<BrowseAction>>;
}
