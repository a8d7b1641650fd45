//! Application state definitions

use super::forms::{RegistrationForm, ValidationErrors};
use super::loading::LoadingWindow;
use super::role::Role;
use super::toast::{ToastOptions, ToastQueue};

/// Terminals shorter than this use the compact layout
pub const COMPACT_HEIGHT_THRESHOLD: u16 = 30;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    /// Registration accepted; dialog over the form
    Success,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub role: Role,
    pub form: RegistrationForm,
    /// Errors from the most recent submit attempt
    pub errors: ValidationErrors,
    /// Set once a registration has been accepted
    pub submitted: bool,
    /// Role of the submission currently awaiting a response
    pub in_flight: Option<Role>,
    pub toasts: ToastQueue,
    pub toast_options: ToastOptions,
    pub loading: LoadingWindow,
    /// Header and footer hidden on short terminals
    pub compact: bool,
}

impl AppState {
    pub fn with_role(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Recompute the compact layout flag from the terminal height
    pub fn update_layout(&mut self, terminal_height: u16) {
        self.compact = terminal_height < COMPACT_HEIGHT_THRESHOLD;
    }

    /// Clear the form for another registration. The role selection is kept.
    pub fn reset_form(&mut self) {
        self.form = RegistrationForm::new();
        self.errors = ValidationErrors::default();
        self.submitted = false;
        self.current_view = View::Register;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldName;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Register);
        assert_eq!(state.role, Role::Donor);
        assert!(state.errors.is_empty());
        assert!(!state.submitted);
        assert!(!state.is_submitting());
        assert!(!state.compact);
    }

    #[test]
    fn test_with_role() {
        let state = AppState::with_role(Role::Donee);
        assert_eq!(state.role, Role::Donee);
    }

    #[test]
    fn test_update_layout_threshold() {
        let mut state = AppState::default();
        state.update_layout(29);
        assert!(state.compact);
        state.update_layout(30);
        assert!(!state.compact);
    }

    #[test]
    fn test_reset_form_keeps_role() {
        let mut state = AppState::with_role(Role::BloodManager);
        state.form.email.value = "x@y.z".into();
        state.submitted = true;
        state.current_view = View::Success;

        state.reset_form();

        assert_eq!(state.role, Role::BloodManager);
        assert_eq!(state.form.field(FieldName::Email).as_text(), "");
        assert!(!state.submitted);
        assert_eq!(state.current_view, View::Register);
    }
}
