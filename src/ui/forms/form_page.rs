//! Form page rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FormButton, FormSession};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::ops::Range;

/// Draw the form being edited, with its submit/cancel buttons
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let Some(session) = app.state.form_session.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", session.config().display_title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .horizontal_margin(1)
        .split(inner);

    draw_fields(frame, chunks[0], session);
    draw_buttons(frame, chunks[1], session);
}

fn draw_fields(frame: &mut Frame, area: Rect, session: &FormSession) {
    let fields = &session.config().fields;
    let heights: Vec<u16> = fields.iter().map(field_height).collect();
    let focus = session.active_index().min(fields.len().saturating_sub(1));
    let range = visible_range(&heights, focus, area.height);

    let mut y = area.y;
    for index in range {
        let field = &fields[index];
        let height = heights[index].min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        let value = session.display_value(field);
        draw_field(
            frame,
            field_area,
            field,
            &value,
            session.active_index() == index,
        );
        y += height;
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, session: &FormSession) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16), // Submit
            Constraint::Length(16), // Cancel
            Constraint::Min(0),     // remaining space
        ])
        .split(area);

    let on_buttons = session.is_actions_row_active();
    let config = session.config();
    render_button(
        frame,
        chunks[0],
        config.submit_label(),
        on_buttons && session.selected_button == FormButton::Submit,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        config.cancel_label(),
        on_buttons && session.selected_button == FormButton::Cancel,
        None,
    );
}

/// Fields that fit in `available` rows while keeping `focus` visible.
///
/// Starts from the top when everything up to the focused field fits,
/// otherwise scrolls so the focused field is the last one shown.
pub fn visible_range(heights: &[u16], focus: usize, available: u16) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }
    let focus = focus.min(heights.len() - 1);

    let mut start = focus;
    let mut used = heights[focus];
    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    let mut end = focus + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    if start > 0 {
        return start..end;
    }
    // Everything above the focus fits, so show from the top
    let mut used = 0;
    let mut end = 0;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }
    0..end.max(focus + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_fit() {
        assert_eq!(visible_range(&[3, 3, 6], 0, 20), 0..3);
        assert_eq!(visible_range(&[3, 3, 6], 2, 20), 0..3);
    }

    #[test]
    fn test_scrolls_to_keep_focus_visible() {
        let heights = [3, 3, 3, 3, 3];
        assert_eq!(visible_range(&heights, 0, 9), 0..3);
        assert_eq!(visible_range(&heights, 4, 9), 2..5);
        assert_eq!(visible_range(&heights, 3, 9), 1..4);
    }

    #[test]
    fn test_focus_larger_than_area_still_shown() {
        assert_eq!(visible_range(&[3, 6], 1, 4), 1..2);
    }

    #[test]
    fn test_empty_form() {
        assert_eq!(visible_range(&[], 0, 10), 0..0);
    }
}
