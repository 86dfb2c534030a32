//! TUI Views module
//!
//! The search bar, category tabs, entry list, detail pane and status bar,
//! plus the toast overlay.

pub mod detail;
pub mod entry_list;
pub mod search_bar;
pub mod status_bar;
pub mod tabs;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{top_right_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    search_bar::render(frame, app, layout.search);
    tabs::render(frame, app, layout.tabs);
    entry_list::render(frame, app, layout.list);
    detail::render(frame, app, layout.detail);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        let area = top_right_rect(48, 5, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::None => {}
    }
}
