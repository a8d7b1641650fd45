//! Registration form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::{FieldName, Focus, Role};
use crate::ui::components::{render_button, render_toggle_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};
use std::time::Instant;

/// Widest the form box gets
const FORM_MAX_WIDTH: u16 = 64;
/// Below this inner width first and last name stack vertically
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 44;

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Draw the registration form centred in `area`
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let width = FORM_MAX_WIDTH.min(area.width);
    let form_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let block = Block::default()
        .title(Span::styled(
            " Register your account ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let state = &app.state;
    let errors = &state.errors;
    let has_error = |name| errors.get(name).is_some();
    let side_by_side = inner.width >= SIDE_BY_SIDE_MIN_WIDTH;

    let names_height = if side_by_side {
        field_height(has_error(FieldName::FirstName) || has_error(FieldName::LastName))
    } else {
        field_height(has_error(FieldName::FirstName)) + field_height(has_error(FieldName::LastName))
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Role selector
            Constraint::Length(names_height),  // First / last name
            Constraint::Length(field_height(has_error(FieldName::Email))),
            Constraint::Length(field_height(has_error(FieldName::Contact))),
            Constraint::Length(field_height(has_error(FieldName::Password))),
            Constraint::Length(field_height(has_error(FieldName::ConfirmPassword))),
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),
        ])
        .split(inner);

    draw_role_selector(frame, rows[0], state.role, state.form.focus() == Focus::RoleSelector);

    let name_areas = Layout::default()
        .direction(if side_by_side {
            Direction::Horizontal
        } else {
            Direction::Vertical
        })
        .constraints(if side_by_side {
            [Constraint::Percentage(50), Constraint::Percentage(50)]
        } else {
            [
                Constraint::Length(field_height(has_error(FieldName::FirstName))),
                Constraint::Min(0),
            ]
        })
        .split(rows[1]);

    let field_areas = [
        (FieldName::FirstName, name_areas[0]),
        (FieldName::LastName, name_areas[1]),
        (FieldName::Email, rows[2]),
        (FieldName::Contact, rows[3]),
        (FieldName::Password, rows[4]),
        (FieldName::ConfirmPassword, rows[5]),
    ];
    for (name, field_area) in field_areas {
        draw_field(
            frame,
            field_area,
            state.form.field(name),
            state.form.focus() == Focus::Field(name),
            errors.get(name),
        );
    }

    let label = if app.loading_visible(now) {
        format!("{} Registering...", spinner_frame())
    } else {
        "Register".to_string()
    };
    render_button(
        frame,
        rows[6],
        &label,
        state.form.focus() == Focus::SubmitButton,
        !state.is_submitting(),
        Some(Color::Magenta),
    );
}

fn draw_role_selector(frame: &mut Frame, area: Rect, current: Role, focused: bool) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for role in Role::ALL {
        render_toggle_button(
            frame,
            cells[role.index()],
            &format!("{} {}", role.icon(), role.label()),
            role == current,
            focused,
        );
    }
}

/// Spinner glyph for the wall clock, ~10 frames per second
fn spinner_frame() -> &'static str {
    let tick = chrono::Utc::now().timestamp_subsec_millis() / 100;
    SPINNER[tick as usize % SPINNER.len()]
}
