//! Entry list view
//!
//! One row per visible entry: term, category and meaning

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::display::NO_ENTRIES;
use crate::tui::app::App;

/// Render the entry list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Entries ({}) ", app.visible.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.visible.is_empty() {
        let paragraph = Paragraph::new(NO_ENTRIES)
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.term.clone()).style(Style::default().fg(Color::Yellow)),
                Cell::from(entry.category.clone()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(entry.meaning.clone()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Term", "Category", "Meaning"])
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(0);

    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block)
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}
