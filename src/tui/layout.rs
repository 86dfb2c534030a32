//! Layout definitions for the TUI
//!
//! Search bar on top, category tabs below it, the entry list beside a detail
//! pane, and a one-line status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Search input
    pub search: Rect,
    /// Category tabs
    pub tabs: Rect,
    /// Entry list
    pub list: Rect,
    /// Details of the selected entry
    pub detail: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // List and detail
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(vertical[2]);

        Self {
            search: vertical[0],
            tabs: vertical[1],
            list: horizontal[0],
            detail: horizontal[1],
            status_bar: vertical[3],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// A box of at most `width` x `height` in the top-right corner of `r`
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(r.x + r.width - width, r.y, width, height)
}
