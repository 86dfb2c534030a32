//! Status bar view
//!
//! Shows the contact button label and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::browser::CONTACT_COPIED_LABEL;
use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let label = app.contact_label();
    let label_style = if label == CONTACT_COPIED_LABEL {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", label), label_style),
        Span::styled("Ctrl+Y", Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::styled(
            format!("{} shown", app.visible.len()),
            Style::default().fg(Color::White),
        ),
    ];

    // Key hints (right-aligned)
    let hints = " F1:Help  Tab:Category  Enter:Search web  Esc:Quit ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.chars().count());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
