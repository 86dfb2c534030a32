//! Event handler for the TUI
//!
//! Turns key presses into edits of the search field, list navigation, or
//! [`BrowseAction`]s for the browser session.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::browser::{BrowseAction, Browser, ClipboardSink, Flow, Launcher};
use crate::models::Category;

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event<L, C>(app: &mut App, browser: &mut Browser<L, C>, event: Event) -> Result<()>
where
    L: Launcher,
    C: ClipboardSink,
{
    match event {
        Event::Key(key) => handle_key_event(app, browser, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Hand an action to the browser and sync tab state back
fn dispatch<L, C>(app: &mut App, browser: &mut Browser<L, C>, action: BrowseAction) -> Result<()>
where
    L: Launcher,
    C: ClipboardSink,
{
    let flow = browser.handle(action, app)?;
    app.active_tab = browser.filter().category();
    if flow == Flow::Quit {
        app.quit();
    }
    Ok(())
}

/// Handle a key event
fn handle_key_event<L, C>(app: &mut App, browser: &mut Browser<L, C>, key: KeyEvent) -> Result<()>
where
    L: Launcher,
    C: ClipboardSink,
{
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl-C quits from anywhere, including the help dialog
    if ctrl && key.code == KeyCode::Char('c') {
        return dispatch(app, browser, BrowseAction::Quit);
    }

    // Any other key closes the help dialog
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    match key.code {
        KeyCode::Char('y') if ctrl => dispatch(app, browser, BrowseAction::CopyContact),
        KeyCode::Char('a') if ctrl => {
            app.search.clear();
            dispatch(app, browser, BrowseAction::ShowAll)
        }
        KeyCode::F(1) => {
            app.open_dialog(ActiveDialog::Help);
            Ok(())
        }
        KeyCode::F(2) => select_tab(app, browser, Category::Root),
        KeyCode::F(3) => select_tab(app, browser, Category::Prefix),
        KeyCode::F(4) => select_tab(app, browser, Category::Suffix),
        KeyCode::Tab => {
            let next = app.active_tab.map(|c| c.next()).unwrap_or(Category::Root);
            select_tab(app, browser, next)
        }
        KeyCode::BackTab => {
            let prev = app.active_tab.map(|c| c.prev()).unwrap_or(Category::Suffix);
            select_tab(app, browser, prev)
        }
        KeyCode::Esc => {
            if !app.search.is_empty() {
                app.search.clear();
                dispatch(app, browser, BrowseAction::ShowAll)
            } else if app.active_tab.is_some() {
                dispatch(app, browser, BrowseAction::ShowAll)
            } else {
                dispatch(app, browser, BrowseAction::Quit)
            }
        }

        // List navigation
        KeyCode::Up => {
            app.move_up();
            Ok(())
        }
        KeyCode::Down => {
            app.move_down();
            Ok(())
        }
        KeyCode::PageUp => {
            app.page_up();
            Ok(())
        }
        KeyCode::PageDown => {
            app.page_down();
            Ok(())
        }
        KeyCode::Enter => {
            if app.selected_entry().is_some() {
                let index = app.selected_index;
                dispatch(app, browser, BrowseAction::Activate(index))
            } else {
                Ok(())
            }
        }

        // Search field editing
        KeyCode::Left => {
            app.search.move_left();
            Ok(())
        }
        KeyCode::Right => {
            app.search.move_right();
            Ok(())
        }
        KeyCode::Home => {
            app.search.move_start();
            Ok(())
        }
        KeyCode::End => {
            app.search.move_end();
            Ok(())
        }
        KeyCode::Backspace => {
            app.search.backspace();
            search_changed(app, browser)
        }
        KeyCode::Delete => {
            app.search.delete();
            search_changed(app, browser)
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            app.search.insert(c);
            search_changed(app, browser)
        }
        _ => Ok(()),
    }
}

fn search_changed<L, C>(app: &mut App, browser: &mut Browser<L, C>) -> Result<()>
where
    L: Launcher,
    C: ClipboardSink,
{
    let query = app.search.value().to_string();
    dispatch(app, browser, BrowseAction::Search(query))
}

/// Tabs and search are one filter; picking a tab clears the search text
fn select_tab<L, C>(app: &mut App, browser: &mut Browser<L, C>, category: Category) -> Result<()>
where
    L: Launcher,
    C: ClipboardSink,
{
    app.search.clear();
    dispatch(app, browser, BrowseAction::SelectCategory(category))
}
