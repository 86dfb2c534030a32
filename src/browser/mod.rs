//! Browsing session and its capability seams
//!
//! - `surface`: the `Renderer` and `InputSource` traits and the actions that
//!   flow between them
//! - `desktop`: web search and clipboard side effects
//! - `session`: the `Browser` that ties store, filter and surfaces together

pub mod desktop;
pub mod session;
pub mod surface;

pub use desktop::{search_url, ClipboardSink, Launcher, SystemClipboard, SystemLauncher};
pub use session::{Browser, Flow};
pub use surface::{
    search_placeholder, BrowseAction, InputSource, Notice, NoticeKind, Renderer,
    CONTACT_COPIED_LABEL, CONTACT_IDLE_LABEL,
};
