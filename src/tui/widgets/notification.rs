//! Toast notification widget
//!
//! Displays transient notices from the browser session.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::browser::{Notice, NoticeKind};

/// Colour, icon and title for a notice kind
fn kind_style(kind: NoticeKind) -> (Color, &'static str, &'static str) {
    match kind {
        NoticeKind::Info => (Color::Blue, "i", "Info"),
        NoticeKind::Success => (Color::Green, "+", "Done"),
        NoticeKind::Error => (Color::Red, "x", "Error"),
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// The notification message
    pub message: String,
    /// Severity
    pub kind: NoticeKind,
    /// Time when notification was created
    pub created_at: Instant,
    /// How long to display it
    pub duration: Duration,
}

impl Notification {
    /// Create a toast from a browser notice
    pub fn from_notice(notice: Notice) -> Self {
        Self {
            message: notice.message,
            kind: notice.kind,
            created_at: Instant::now(),
            duration: notice.duration,
        }
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl Widget for NotificationWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (color, icon, title) = kind_style(self.notification.kind);

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }
}
