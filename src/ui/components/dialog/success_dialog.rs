//! Registration submitted dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::Role;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the confirmation shown after a registration is accepted
pub fn render_success_dialog(frame: &mut Frame, role: Role) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::styled("Enter", key_style),
        Span::raw(" register another · "),
        Span::styled("Esc", key_style),
        Span::raw(" quit"),
    ];

    let message = format!(
        "Your {} account has been created.\nYou can now log in to LifeFlow.",
        role.noun()
    );

    render_dialog(
        frame,
        DialogConfig {
            title: "Registration submitted",
            title_color: Color::Green,
            border_color: Color::Green,
            message: &message,
            hint: Some(hint),
            max_width: 56,
        },
    );
}
