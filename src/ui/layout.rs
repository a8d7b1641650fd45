//! Layout components (header, footer, status bar)

use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Focus, View};
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions. Header and footer are absent in compact mode.
pub struct AppLayout {
    pub header: Option<Rect>,
    pub main: Rect,
    pub footer: Option<Rect>,
    pub status: Rect,
}

/// Split the screen into header, form, footer and status bar
pub fn create_layout(area: Rect, compact: bool) -> AppLayout {
    if compact {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);
        return AppLayout {
            header: None,
            main: chunks[0],
            footer: None,
            status: chunks[1],
        };
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(2), // Footer
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    AppLayout {
        header: Some(chunks[0]),
        main: chunks[1],
        footer: Some(chunks[2]),
        status: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("🩸 ", Style::default().fg(Color::Red)),
        Span::styled(
            "LifeFlow",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · blood donation network", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let lines = vec![
        Line::from(vec![
            Span::styled("Already have an account? ", Style::default().fg(Color::Gray)),
            Span::styled("Log in", Style::default().fg(Color::Magenta)),
            Span::styled(" from the LifeFlow website.", Style::default().fg(Color::Gray)),
        ]),
        Line::from(Span::styled(
            format!("© {year} LifeFlow. All rights reserved."),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Back-end
    spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    spans.push(Span::styled(
        app.backend_label.as_str(),
        Style::default().fg(Color::Blue),
    ));
    spans.push(Span::raw(" | "));

    let hints = get_view_hints(&app.state.current_view, app.state.form.focus());
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if !app.state.errors.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{} field(s) need attention", app.state.errors.len()),
            Style::default().fg(Color::Red),
        ));
    }

    if let Some(role) = app.state.in_flight {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Submitting {} registration...", role.noun()),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn get_view_hints(view: &View, focus: Focus) -> String {
    match view {
        View::Success => "Enter: register another | Esc: quit".to_string(),
        View::Register => match focus {
            Focus::RoleSelector => {
                format!("←/→ or 1-3: role | Tab: next | {SUBMIT_SHORTCUT}: register | Esc: quit")
            }
            Focus::Field(name) if name.is_secret() => {
                format!("Tab: next | {REVEAL_SHORTCUT}: show/hide | {SUBMIT_SHORTCUT}: register")
            }
            Focus::Field(_) => {
                format!("Tab: next | Shift+Tab: prev | Ctrl+U: clear | {SUBMIT_SHORTCUT}: register")
            }
            Focus::SubmitButton => "Enter: register | Tab: next | Esc: quit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;

    #[test]
    fn test_full_layout_has_header_and_footer() {
        let layout = create_layout(Rect::new(0, 0, 80, 40), false);
        assert_eq!(layout.header.map(|r| r.height), Some(2));
        assert_eq!(layout.footer.map(|r| r.height), Some(2));
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 39);
        assert_eq!(layout.main.height, 35);
    }

    #[test]
    fn test_compact_layout_drops_chrome() {
        let layout = create_layout(Rect::new(0, 0, 80, 24), true);
        assert!(layout.header.is_none());
        assert!(layout.footer.is_none());
        assert_eq!(layout.main.height, 23);
    }

    #[test]
    fn test_hints_mention_reveal_on_password() {
        let hints = get_view_hints(&View::Register, Focus::Field(FieldName::Password));
        assert!(hints.contains(REVEAL_SHORTCUT));
        let hints = get_view_hints(&View::Register, Focus::Field(FieldName::Email));
        assert!(!hints.contains(REVEAL_SHORTCUT));
    }
}
