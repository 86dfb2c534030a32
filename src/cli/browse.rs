//! Interactive line-mode session
//!
//! Reads one line at a time from stdin. Plain text is a search; lines
//! starting with `:` are commands.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::browser::{BrowseAction, Browser, ClipboardSink, InputSource, Launcher, Notice, Renderer};
use crate::config::Settings;
use crate::display::TextRenderer;
use crate::error::{GlossaryError, GlossaryResult};
use crate::models::Category;
use crate::storage::EntryStore;

/// Parse one input line into an action
pub fn parse_line(line: &str) -> BrowseAction {
    let trimmed = line.trim_end_matches(['\r', '\n']);

    let Some(command) = trimmed.trim().strip_prefix(':') else {
        return BrowseAction::Search(trimmed.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or("").to_lowercase();
    let arg = parts.next();

    match (name.as_str(), arg) {
        ("all", None) => BrowseAction::ShowAll,
        ("copy", None) => BrowseAction::CopyContact,
        ("help", None) | ("h", None) => BrowseAction::Help,
        ("quit", None) | ("q", None) => BrowseAction::Quit,
        ("open", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 => BrowseAction::Activate(n - 1),
            _ => BrowseAction::Unknown(trimmed.trim().to_string()),
        },
        (other, None) => match Category::parse(other) {
            Some(category) => BrowseAction::SelectCategory(category),
            None => BrowseAction::Unknown(trimmed.trim().to_string()),
        },
        _ => BrowseAction::Unknown(trimmed.trim().to_string()),
    }
}

/// Input source over any buffered reader
pub struct LineInput<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_action(&mut self) -> GlossaryResult<Option<BrowseAction>> {
        self.buffer.clear();
        let read = self
            .reader
            .read_line(&mut self.buffer)
            .map_err(|e| GlossaryError::Io(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            return Ok(None);
        }

        let action = parse_line(&self.buffer);
        debug!(?action, "line input");
        Ok(Some(action))
    }
}

/// Drive a browser from `input`, writing to `output`
pub fn run_session<B, W, L, C>(
    browser: &mut Browser<'_, L, C>,
    input: B,
    output: W,
    load_error: Option<&str>,
) -> GlossaryResult<W>
where
    B: BufRead,
    W: Write,
    L: Launcher,
    C: ClipboardSink,
{
    let mut renderer = TextRenderer::new(output);
    if let Some(message) = load_error {
        renderer.notify(Notice::error(message))?;
    }

    let mut input = LineInput::new(input);
    browser.run(&mut input, &mut renderer)?;

    Ok(renderer.into_inner())
}

/// Handle `browse`: a line-mode session on stdin/stdout
pub fn run_line_session(
    store: Option<&EntryStore>,
    settings: &Settings,
    load_error: Option<&str>,
) -> GlossaryResult<()> {
    let mut browser = Browser::with_system(store, settings);
    let stdin = io::stdin();
    let mut stdout = run_session(&mut browser, stdin.lock(), io::stdout(), load_error)?;
    writeln!(stdout)?;
    Ok(())
}
