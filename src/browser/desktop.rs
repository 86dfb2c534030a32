//! Desktop side effects: opening a web search and copying to the clipboard

use arboard::Clipboard;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{GlossaryError, GlossaryResult};
use crate::models::Entry;

/// Opens URLs in an external browser
pub trait Launcher {
    fn open_url(&mut self, url: &str) -> GlossaryResult<()>;
}

/// Receives text for the system clipboard
pub trait ClipboardSink {
    fn copy_text(&mut self, text: &str) -> GlossaryResult<()>;
}

/// Launcher backed by the platform's default browser
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_url(&mut self, url: &str) -> GlossaryResult<()> {
        open::that(url).map_err(|e| GlossaryError::Launch {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Clipboard backed by arboard
///
/// The handle is kept for the lifetime of the value; on some platforms the
/// copied text is only served while it is alive. A short-lived process
/// should use [`SystemClipboard::waiting`] instead.
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
    wait: bool,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                warn!(error = %e, "clipboard unavailable");
                None
            }
        };
        Self {
            clipboard,
            wait: false,
        }
    }

    /// Clipboard for one-shot commands
    ///
    /// On Linux each copy blocks until another client takes over the
    /// selection, so the text outlives the process. Elsewhere it behaves
    /// like [`SystemClipboard::new`].
    pub fn waiting() -> Self {
        Self {
            wait: true,
            ..Self::new()
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> GlossaryResult<()> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| GlossaryError::Clipboard("Clipboard not available".into()))?;

        set_text(clipboard, text, self.wait)
            .map_err(|e| GlossaryError::Clipboard(e.to_string()))?;
        debug!("copied {} bytes to clipboard", text.len());
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str, wait: bool) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    if wait {
        clipboard.set().wait().text(text.to_string())
    } else {
        clipboard.set_text(text)
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str, _wait: bool) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Text sent to the search engine for an entry
pub fn search_text(entry: &Entry, include_origin: bool) -> String {
    if include_origin {
        format!("{} {} {}", entry.term, entry.origin, entry.category)
    } else {
        format!("{} {}", entry.term, entry.category)
    }
}

/// Web search URL for an entry
pub fn search_url(settings: &Settings, entry: &Entry) -> String {
    let text = search_text(entry, settings.search_includes_origin);
    format!("{}{}", settings.search_url_base, urlencoding::encode(&text))
}
