//! Field rendering utilities for forms

use crate::state::{FieldType, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a textarea occupies, borders included
pub const TEXTAREA_HEIGHT: u16 = 6;
/// Rows every other field occupies, borders included
pub const FIELD_HEIGHT: u16 = 3;

/// Height of a field's box
pub fn field_height(field: &FormField) -> u16 {
    match field.field_type {
        FieldType::Textarea => TEXTAREA_HEIGHT,
        _ => FIELD_HEIGHT,
    }
}

/// Draw a form field with its current display value
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, value: &str, is_active: bool) {
    let accent = if field.disabled {
        Color::DarkGray
    } else if is_active {
        Color::Cyan
    } else {
        Color::Gray
    };
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active && field.field_type.is_text() {
        "▌"
    } else {
        ""
    };
    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let content = match field.field_type {
        FieldType::Checkbox => Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(accent)),
            Span::raw(" "),
            Span::styled(field.label.clone(), Style::default().fg(accent)),
        ])),
        FieldType::Select => {
            let shown = if value.is_empty() {
                Span::styled("(choose)", placeholder_style)
            } else {
                Span::styled(value.to_string(), Style::default().fg(accent))
            };
            if is_active {
                Paragraph::new(Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::Cyan)),
                    shown,
                    Span::styled(" ▶", Style::default().fg(Color::Cyan)),
                ]))
            } else {
                Paragraph::new(Line::from(shown))
            }
        }
        FieldType::Input | FieldType::Textarea if value.is_empty() => {
            let hint = match (&field.placeholder, is_active) {
                (_, true) => String::new(),
                (Some(placeholder), false) => placeholder.clone(),
                (None, false) => "(empty)".to_string(),
            };
            Paragraph::new(Line::from(vec![
                Span::styled(hint, placeholder_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ]))
        }
        FieldType::Textarea => {
            let mut lines: Vec<Line> = value
                .lines()
                .map(|l| Line::styled(l.to_string(), Style::default().fg(accent)))
                .collect();
            if value.ends_with('\n') {
                lines.push(Line::default());
            }
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
            Paragraph::new(lines)
        }
        FieldType::Input => Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), Style::default().fg(accent)),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])),
    };

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn field_title(field: &FormField) -> String {
    let mut title = format!(" {}", field.label);
    if field.required {
        title.push_str(" *");
    }
    if field.disabled {
        title.push_str(" (disabled)");
    }
    title.push(' ');
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_heights() {
        assert_eq!(field_height(&FormField::textarea("m", "Message")), 6);
        assert_eq!(field_height(&FormField::input("n", "Name")), 3);
        assert_eq!(field_height(&FormField::checkbox("c", "C")), 3);
    }

    #[test]
    fn test_field_title_markers() {
        assert_eq!(field_title(&FormField::input("n", "Name")), " Name ");
        assert_eq!(field_title(&FormField::input("n", "Name").required()), " Name * ");
        assert_eq!(
            field_title(&FormField::input("n", "Name").disabled()),
            " Name (disabled) "
        );
    }
}
