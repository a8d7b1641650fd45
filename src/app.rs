//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::is_shortcut;
use crate::registration::{dispatch, report, RoleRegistry, SubmissionOutcome};
use crate::state::{validate, AppState, Focus, Form, Role, ToastOptions, View};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration capability per role
    registry: RoleRegistry,
    /// Where spawned submissions report back
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcome_rx: UnboundedReceiver<SubmissionOutcome>,
    /// Shown in the status bar ("offline" or the API address)
    pub backend_label: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &TuiConfig) -> Self {
        let (registry, backend_label) = if config.is_offline() {
            (
                RoleRegistry::memory(config.offline_latency()),
                "offline".to_string(),
            )
        } else {
            let url = config.api_base_url();
            (RoleRegistry::http(url), url.to_string())
        };
        tracing::info!("Using registration back-end: {backend_label}");

        Self::with_registry(
            registry,
            config.default_role(),
            config.toast_options(),
            backend_label,
        )
    }

    pub fn with_registry(
        registry: RoleRegistry,
        role: Role,
        toast_options: ToastOptions,
        backend_label: String,
    ) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut state = AppState::with_role(role);
        state.toast_options = toast_options;

        Self {
            state,
            registry,
            outcome_tx,
            outcome_rx,
            backend_label,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Apply finished submissions and advance timers
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
        self.state.toasts.prune_expired(now);
        let loading = self.state.is_submitting() || self.registry.any_loading();
        self.state.loading.update(loading, now);
    }

    /// Terminal was resized
    pub fn handle_resize(&mut self, height: u16) {
        self.state.update_layout(height);
    }

    pub fn loading_visible(&self, now: Instant) -> bool {
        self.state.loading.is_visible(now)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::Success => self.handle_success_key(key),
        }
    }

    fn handle_register_key(&mut self, key: KeyEvent) {
        if is_shortcut(key.modifiers) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit();
                }
                KeyCode::Char('r') => {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        field.toggle_reveal();
                    }
                }
                KeyCode::Char('u') => {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        field.clear();
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                if self.state.toasts.dismiss_all() == 0 {
                    self.quit();
                }
            }
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => match self.state.form.focus() {
                Focus::SubmitButton => {
                    self.submit();
                }
                Focus::RoleSelector | Focus::Field(_) => self.state.form.next_field(),
            },
            code => match self.state.form.focus() {
                Focus::RoleSelector => self.handle_role_key(code),
                Focus::Field(_) => {
                    if let Some(field) = self.state.form.get_active_field_mut() {
                        match code {
                            KeyCode::Char(c) => field.push_char(c),
                            KeyCode::Backspace => field.pop_char(),
                            _ => {}
                        }
                    }
                }
                Focus::SubmitButton => {}
            },
        }
    }

    fn handle_role_key(&mut self, code: KeyCode) {
        let role = match code {
            KeyCode::Left => Some(self.state.role.prev()),
            KeyCode::Right | KeyCode::Char(' ') => Some(self.state.role.next()),
            KeyCode::Char(c) => c
                .to_digit(10)
                .and_then(|d| (d as usize).checked_sub(1))
                .and_then(Role::from_index),
            _ => None,
        };
        if let Some(role) = role {
            self.state.role = role;
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.reset_form(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    /// Validate and, if clean, send the form to the selected role's back-end.
    /// Returns true when a request was dispatched.
    pub fn submit(&mut self) -> bool {
        if let Some(role) = self.state.in_flight {
            tracing::debug!(
                "Ignoring submit: {} registration already in flight",
                role.noun()
            );
            return false;
        }

        self.state.errors = validate(&self.state.form);
        if let Some(first) = self.state.errors.first_field() {
            let fields: Vec<&str> = self
                .state
                .errors
                .iter()
                .map(|(field, _)| field.as_str())
                .collect();
            tracing::debug!("Form has validation errors in: {}", fields.join(", "));
            self.state.form.focus_field(first);
            return false;
        }

        let role = self.state.role;
        let payload = self.state.form.payload();
        self.state.in_flight = Some(role);
        self.state.loading.update(true, Instant::now());
        tracing::info!("Submitting {} registration", role.noun());

        let registry = self.registry.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let outcome = dispatch(&registry, role, payload).await;
            // Receiver lives as long as the App; a send error only means we are shutting down
            let _ = tx.send(outcome);
        });
        true
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome) {
        if self.state.in_flight.take() != Some(outcome.role()) {
            tracing::debug!(
                "Settled a {} submission that was not in flight",
                outcome.role().noun()
            );
        }
        if report(&outcome, &mut self.state.toasts, self.state.toast_options) {
            self.state.submitted = true;
            self.state.current_view = View::Success;
        }
    }
}
