//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let now = Instant::now();
    let areas = layout::create_layout(frame.area(), app.state.compact);

    if let Some(header) = areas.header {
        layout::draw_header(frame, header);
    }

    forms::draw_register(frame, areas.main, app, now);

    if let Some(footer) = areas.footer {
        layout::draw_footer(frame, footer);
    }
    layout::draw_status_bar(frame, areas.status, app);

    // Overlays
    if app.state.current_view == View::Success {
        components::render_success_dialog(frame, app.state.role);
    }
    components::render_toasts(frame, &app.state.toasts, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::RoleRegistry;
    use crate::state::{Role, ToastOptions};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        App::with_registry(
            RoleRegistry::memory(Duration::ZERO),
            Role::Donee,
            ToastOptions::default(),
            "offline".to_string(),
        )
    }

    #[test]
    fn test_full_screen_has_footer() {
        let text = render(&app(), 100, 45);
        assert!(text.contains("LifeFlow. All rights reserved."));
        assert!(text.contains("offline"));
    }

    #[test]
    fn test_compact_hides_footer() {
        let mut app = app();
        app.state.update_layout(26);
        let text = render(&app, 100, 26);
        assert!(!text.contains("All rights reserved"));
    }

    #[test]
    fn test_success_dialog_overlay() {
        let mut app = app();
        app.state.current_view = View::Success;
        let text = render(&app, 100, 45);
        assert!(text.contains("Registration submitted"));
        assert!(text.contains("donee"));
    }

    #[test]
    fn test_toast_overlay() {
        let mut app = app();
        app.state
            .toasts
            .push_at("Email taken", ToastOptions::default(), Instant::now());
        let text = render(&app, 100, 45);
        assert!(text.contains("Email taken"));
    }
}
