//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: the bordered input, plus one for its error
pub fn field_height(has_error: bool) -> u16 {
    if has_error {
        4
    } else {
        3
    }
}

/// Draw a form field with its validation message underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value();
    let mut spans = if display_value.is_empty() && !is_active {
        vec![Span::styled("(empty)", Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::styled(display_value, text_style)]
    };
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if field.is_secret && field.revealed {
        block = block.title_bottom(Line::from(" visible ").right_aligned());
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(message) = error {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {message}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            )),
            chunks[1],
        );
    }
}
