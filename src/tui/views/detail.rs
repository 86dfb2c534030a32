//! Detail pane for the selected entry

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::browser::search_url;
use crate::models::Entry;
use crate::tui::app::App;

/// Render the detail pane
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match app.selected_entry() {
        Some(entry) => detail_lines(entry, &search_url(app.settings, entry)),
        None => vec![Line::from(Span::styled(
            "Nothing selected",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn field_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(Color::Cyan)),
        Span::raw(value.to_string()),
    ])
}

fn detail_lines(entry: &Entry, url: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            entry.term.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field_line("Category", &entry.category),
    ];

    if !entry.origin.is_empty() {
        lines.push(field_line("Origin", &entry.origin));
    }
    lines.push(field_line("Meaning", &entry.meaning));

    if !entry.usage_examples.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Usage examples",
            Style::default().fg(Color::Cyan),
        )));
        for example in &entry.usage_examples {
            lines.push(Line::from(format!("  - {}", example)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: search the web",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        url.to_string(),
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_lines_skip_empty_origin() {
        let entry = Entry::new("bio-", "Root").with_meaning("life");
        let lines = detail_lines(&entry, "https://example.com/?q=bio");
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert_eq!(text[0], "bio-");
        assert!(text.iter().any(|l| l.starts_with("Meaning") && l.ends_with("life")));
        assert!(!text.iter().any(|l| l.starts_with("Origin")));
        assert_eq!(text.last().unwrap(), "https://example.com/?q=bio");
    }
}
