//! Registration form state

use super::field::{FieldName, FormField};
use crate::registration::RegistrationPayload;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently has keyboard focus on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    RoleSelector,
    Field(FieldName),
    SubmitButton,
}

/// The six registration inputs plus focus bookkeeping
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub contact: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    /// 0 = role row, 1..=6 = fields, 7 = Register button
    pub active_field_index: usize,
}

impl RegistrationForm {
    const SUBMIT_INDEX: usize = FieldName::ALL.len() + 1;

    pub fn new() -> Self {
        Self {
            first_name: FormField::new(FieldName::FirstName),
            last_name: FormField::new(FieldName::LastName),
            email: FormField::new(FieldName::Email),
            contact: FormField::new(FieldName::Contact),
            password: FormField::new(FieldName::Password),
            confirm_password: FormField::new(FieldName::ConfirmPassword),
            // Start on the first text input rather than the role row
            active_field_index: 1,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Contact => &self.contact,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Contact => &mut self.contact,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn focus(&self) -> Focus {
        match self.active_field_index {
            0 => Focus::RoleSelector,
            i if i == Self::SUBMIT_INDEX => Focus::SubmitButton,
            i => Focus::Field(FieldName::ALL[i - 1]),
        }
    }

    /// Move focus directly to a text input
    pub fn focus_field(&mut self, name: FieldName) {
        if let Some(pos) = FieldName::ALL.iter().position(|f| *f == name) {
            self.active_field_index = pos + 1;
        }
    }

    /// The focused text input, if focus is on one
    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus() {
            Focus::Field(name) => Some(self.field_mut(name)),
            Focus::RoleSelector | Focus::SubmitButton => None,
        }
    }

    /// Project the form into the data sent to a registration service.
    /// The confirmation password stays local.
    pub fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
            first_name: self.first_name.as_text().to_string(),
            last_name: self.last_name.as_text().to_string(),
            contact: self.contact.as_text().to_string(),
        }
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_INDEX + 1 // role row, six inputs, button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
