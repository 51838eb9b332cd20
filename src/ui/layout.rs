//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the content area and the status bar line
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.state.navigator.current_path()),
        Style::default().fg(Color::Blue),
    )];

    let pending = app.pending_save_count();
    if pending > 0 {
        spans.push(Span::styled(
            format!("saving {pending}… "),
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        view_hints(app.state.form_session.is_some()),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the current page
fn view_hints(on_form: bool) -> String {
    if on_form {
        format!("Tab:next  ←/→:choose  Space:toggle  {SAVE_SHORTCUT}:submit  Esc:cancel  ^B:back")
    } else {
        "j/k:nav  Enter:open  q:quit".to_string()
    }
}
