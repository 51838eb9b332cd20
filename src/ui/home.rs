//! Home page: list of available forms

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Draw the home page
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let routes = app.state.menu_routes();
    let items: Vec<ListItem> = routes
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(prefix, name_style),
                Span::styled(route.name, name_style),
                Span::raw("  "),
                Span::styled(route.path, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Forms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    let mut list_state = ListState::default().with_selected(Some(app.state.selected_index));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let saved = app.store.snapshot().len();
    let summary = match saved {
        0 => "No saved forms yet".to_string(),
        1 => "1 form has saved values".to_string(),
        n => format!("{n} forms have saved values"),
    };
    frame.render_widget(
        Paragraph::new(summary).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}
