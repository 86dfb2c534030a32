//! Help dialog
//!
//! Lists every keyboard shortcut, grouped by context

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines built from the keybinding table
fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from("Type to search terms, meanings and usage examples."),
        Line::from(""),
    ];

    for context in [KeyContext::Global, KeyContext::Tabs, KeyContext::List] {
        lines.push(Line::from(vec![Span::styled(
            context.title(),
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]));
        lines.push(Line::from(""));
        for kb in get_keybindings(context) {
            lines.push(key_line(&format_keybinding(kb), kb.description));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_copy_shortcut() {
        let text: Vec<String> = help_lines().iter().map(|l| l.to_string()).collect();
        assert!(text
            .iter()
            .any(|l| l.contains("Ctrl+Y") && l.contains("Copy contact email")));
        assert!(text.iter().any(|l| l == "Category Tabs"));
    }
}
