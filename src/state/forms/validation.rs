//! Registration form validation
//!
//! Every rule runs on every call; a field carries at most one message.

use super::field::FieldName;
use super::form_state::RegistrationForm;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));
static CONTACT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid regex"));

/// Field name → message. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// First field (in display order) that has an error
    pub fn first_field(&self) -> Option<FieldName> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &'static str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    fn insert(&mut self, field: FieldName, message: &'static str) {
        self.0.insert(field, message);
    }
}

/// Validate a form snapshot
pub fn validate(form: &RegistrationForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if form.first_name.as_text().is_empty() {
        errors.insert(FieldName::FirstName, "Firstname is required.");
    }
    if form.last_name.as_text().is_empty() {
        errors.insert(FieldName::LastName, "Lastname is required.");
    }

    let email = form.email.as_text();
    if email.is_empty() {
        errors.insert(FieldName::Email, "Email is required.");
    } else if !EMAIL_RE.is_match(email) {
        errors.insert(FieldName::Email, "Invalid email.");
    }

    let contact = form.contact.as_text();
    if contact.is_empty() {
        errors.insert(FieldName::Contact, "Contact number is required.");
    } else if !CONTACT_RE.is_match(contact) {
        errors.insert(FieldName::Contact, "Must be 10 digits.");
    }

    let password = form.password.as_text();
    if password.is_empty() {
        errors.insert(FieldName::Password, "Password is required.");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(FieldName::Password, "Min 8 characters.");
    }

    let confirm = form.confirm_password.as_text();
    if confirm.is_empty() {
        errors.insert(FieldName::ConfirmPassword, "Confirm Password is required.");
    } else if confirm != password {
        errors.insert(FieldName::ConfirmPassword, "Passwords do not match.");
    }

    errors
}
