//! Category tabs view
//!
//! "All" followed by one tab per category, each with its entry count

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use crate::tui::app::App;

/// Tab titles in display order
pub fn tab_titles(app: &App) -> Vec<String> {
    let mut titles = vec![format!("All ({})", app.total_count)];
    titles.extend(
        app.tab_counts
            .iter()
            .map(|(category, count)| format!("{} ({})", category.plural(), count)),
    );
    titles
}

/// Index of the highlighted tab
pub fn selected_tab(app: &App) -> usize {
    match app.active_tab {
        None => 0,
        Some(category) => app
            .tab_counts
            .iter()
            .position(|(c, _)| *c == category)
            .map(|i| i + 1)
            .unwrap_or(0),
    }
}

/// Render the category tabs
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let titles: Vec<Line> = tab_titles(app).into_iter().map(Line::from).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected_tab(app))
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");

    frame.render_widget(tabs, area);
}
