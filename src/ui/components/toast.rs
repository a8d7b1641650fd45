//! Toast overlay rendering

use super::dialog::wrap_text;
use crate::state::{Toast, ToastPosition, ToastQueue, ToastTheme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 38;
const MARGIN: u16 = 1;

/// Draw every visible toast, stacked from its anchor corner
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue, now: Instant) {
    let area = frame.area();
    let mut top_offset = MARGIN;
    let mut bottom_offset = MARGIN;

    // Newest toast sits closest to the corner
    for toast in toasts.iter().rev() {
        let width = TOAST_WIDTH.min(area.width.saturating_sub(MARGIN * 2));
        if width < 8 {
            return;
        }
        let lines = wrap_text(&toast.message, (width - 4) as usize);
        let progress_rows = u16::from(toast.options.show_progress);
        let height = lines.len() as u16 + progress_rows + 2;
        let x = area.x + area.width - width - MARGIN;

        let y = match toast.options.position {
            ToastPosition::TopRight => {
                let y = area.y + top_offset;
                top_offset += height;
                y
            }
            ToastPosition::BottomRight => {
                bottom_offset += height;
                match area.height.checked_sub(bottom_offset) {
                    Some(dy) => area.y + dy,
                    None => continue,
                }
            }
        };
        if y + height > area.y + area.height {
            continue;
        }

        render_toast(frame, Rect::new(x, y, width, height), toast, lines, now);
    }
}

fn render_toast(frame: &mut Frame, rect: Rect, toast: &Toast, lines: Vec<String>, now: Instant) {
    let (bg, fg) = match toast.options.theme {
        ToastTheme::Dark => (Color::Black, Color::White),
        ToastTheme::Light => (Color::White, Color::Black),
    };

    let mut content: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let icon = if i == 0 { "✖ " } else { "  " };
            Line::from(vec![
                Span::styled(icon, Style::default().fg(Color::Red)),
                Span::styled(text, Style::default().fg(fg)),
            ])
        })
        .collect();

    if toast.options.show_progress {
        let inner = rect.width.saturating_sub(2) as f32;
        let filled = (toast.remaining(now) * inner).round() as usize;
        content.push(Line::from(Span::styled(
            "━".repeat(filled),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(Span::styled(
            " Error ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(content).block(block).style(Style::default().bg(bg)),
        rect,
    );
}
