//! Application state for the TUI
//!
//! The App struct holds everything needed for drawing a frame. It is also the
//! [`Renderer`] the browser session pushes results into.

use std::time::{Duration, Instant};

use crate::browser::{
    search_placeholder, Notice, Renderer, CONTACT_COPIED_LABEL, CONTACT_IDLE_LABEL,
};
use crate::config::Settings;
use crate::error::GlossaryResult;
use crate::models::{Category, Entry};
use crate::storage::EntryStore;

use super::widgets::{Notification, NotificationQueue, TextInput};

/// Rows moved by PgUp/PgDn
pub const PAGE_SIZE: usize = 10;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Search field
    pub search: TextInput,

    /// Entries from the last render, in display order
    pub visible: Vec<Entry>,

    /// Selected row in the entry list
    pub selected_index: usize,

    /// Highlighted category tab; `None` is the "All" tab
    pub active_tab: Option<Category>,

    /// Number of entries in the store
    pub total_count: usize,

    /// Entry count per category tab
    pub tab_counts: Vec<(Category, usize)>,

    /// Transient toasts
    pub notifications: NotificationQueue,

    /// When the contact button reverts to its idle label
    pub contact_confirmed_until: Option<Instant>,
}

impl<'a> App<'a> {
    /// Create a new App instance; `store` is `None` when loading failed
    pub fn new(settings: &'a Settings, store: Option<&EntryStore>) -> Self {
        let tab_counts = store
            .map(EntryStore::category_counts)
            .unwrap_or_else(|| Category::ALL.iter().map(|c| (*c, 0)).collect());

        Self {
            settings,
            should_quit: false,
            active_dialog: ActiveDialog::default(),
            search: TextInput::new()
                .placeholder(search_placeholder(0))
                .focused(true),
            visible: Vec::new(),
            selected_index: 0,
            active_tab: None,
            total_count: 0,
            tab_counts,
            notifications: NotificationQueue::new(),
            contact_confirmed_until: None,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Move selection up
    pub fn move_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Move selection down
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.visible.len() {
            self.selected_index += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        let last = self.visible.len().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SIZE).min(last);
    }

    /// The entry under the cursor
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.visible.get(self.selected_index)
    }

    /// Label of the contact button right now
    pub fn contact_label(&self) -> &'static str {
        match self.contact_confirmed_until {
            Some(until) if Instant::now() < until => CONTACT_COPIED_LABEL,
            _ => CONTACT_IDLE_LABEL,
        }
    }

    /// Periodic housekeeping: expire toasts and the copy confirmation
    pub fn tick(&mut self) {
        self.notifications.remove_expired();
        if let Some(until) = self.contact_confirmed_until {
            if Instant::now() >= until {
                self.contact_confirmed_until = None;
            }
        }
    }
}

impl Renderer for App<'_> {
    fn render(&mut self, entries: &[&Entry]) -> GlossaryResult<()> {
        self.visible = entries.iter().map(|e| (*e).clone()).collect();
        self.selected_index = 0;
        Ok(())
    }

    fn set_entry_count(&mut self, count: usize) -> GlossaryResult<()> {
        self.total_count = count;
        self.search.placeholder = search_placeholder(count);
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> GlossaryResult<()> {
        self.notifications.push(Notification::from_notice(notice));
        Ok(())
    }

    fn contact_copied(&mut self, duration: Duration) -> GlossaryResult<()> {
        self.contact_confirmed_until = Some(Instant::now() + duration);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::session::tests::sample_store;

    #[test]
    fn test_render_replaces_list_and_resets_selection() {
        let settings = Settings::default();
        let store = sample_store();
        let mut app = App::new(&settings, Some(&store));

        let all: Vec<&Entry> = store.entries().iter().collect();
        app.render(&all).unwrap();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_index, 2);
        app.move_down();
        assert_eq!(app.selected_index, 2);

        app.render(&all[..1]).unwrap();
        assert_eq!(app.visible.len(), 1);
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_paging_is_clamped() {
        let settings = Settings::default();
        let store = sample_store();
        let mut app = App::new(&settings, Some(&store));
        let all: Vec<&Entry> = store.entries().iter().collect();
        app.render(&all).unwrap();

        app.page_down();
        assert_eq!(app.selected_index, 2);
        app.page_up();
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_selection_on_empty_list() {
        let settings = Settings::default();
        let mut app = App::new(&settings, None);
        app.move_down();
        app.page_down();
        assert_eq!(app.selected_index, 0);
        assert!(app.selected_entry().is_none());
    }

    #[test]
    fn test_placeholder_follows_entry_count() {
        let settings = Settings::default();
        let mut app = App::new(&settings, None);
        assert_eq!(app.search.placeholder, "Search 0 terms...");
        app.set_entry_count(20).unwrap();
        assert_eq!(app.search.placeholder, "Search 20 terms...");
        assert_eq!(app.total_count, 20);
    }

    #[test]
    fn test_contact_label_reverts() {
        let settings = Settings::default();
        let mut app = App::new(&settings, None);
        assert_eq!(app.contact_label(), CONTACT_IDLE_LABEL);

        app.contact_copied(Duration::from_secs(60)).unwrap();
        assert_eq!(app.contact_label(), CONTACT_COPIED_LABEL);

        app.contact_copied(Duration::ZERO).unwrap();
        app.tick();
        assert_eq!(app.contact_label(), CONTACT_IDLE_LABEL);
        assert!(app.contact_confirmed_until.is_none());
    }

    #[test]
    fn test_tab_counts_without_store() {
        let settings = Settings::default();
        let app = App::new(&settings, None);
        assert_eq!(app.tab_counts.len(), 3);
        assert!(app.tab_counts.iter().all(|(_, n)| *n == 0));
    }
}
