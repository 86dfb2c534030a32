//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{debug, info};

use crate::browser::{Browser, Notice, Renderer};
use crate::config::Settings;
use crate::storage::EntryStore;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore the terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// `store` is `None` when the dataset failed to load; the browser then shows
/// an empty list and `load_error` as a notice.
pub fn run_tui(
    store: Option<&EntryStore>,
    settings: &Settings,
    load_error: Option<String>,
) -> Result<()> {
    let mut app = App::new(settings, store);
    let mut browser = Browser::with_system(store, settings);

    browser.start(&mut app)?;
    if let Some(message) = load_error {
        app.notify(Notice::error(message).with_duration(std::time::Duration::from_secs(10)))?;
    }

    let mut terminal = init_terminal()?;
    info!(entries = browser.entry_count(), "tui started");

    let result = event_loop(&mut terminal, &mut app, &mut browser);

    restore_terminal()?;
    debug!("tui stopped");

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, browser: &mut Browser) -> Result<()> {
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, app);
        })?;

        match events.next()? {
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            event => handle_event(app, browser, event)?,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
