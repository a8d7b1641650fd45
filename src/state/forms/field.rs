//! Form field value objects

/// Identifies one input on the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Contact,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// Fields in display order
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Contact,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Machine name (matches the form's input names)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstname",
            Self::LastName => "lastname",
            Self::Email => "email",
            Self::Contact => "contact",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Contact => "Contact",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// Represents a single text input with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    /// Secret fields render masked unless revealed
    pub is_secret: bool,
    pub revealed: bool,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            label: name.label().to_string(),
            value: String::new(),
            is_secret: name.is_secret(),
            revealed: false,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Flip masking for secret fields; no-op otherwise
    pub fn toggle_reveal(&mut self) {
        if self.is_secret {
            self.revealed = !self.revealed;
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.is_secret && !self.revealed {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: FieldName, value: &str) -> FormField {
        let mut field = FormField::new(name);
        field.value = value.to_string();
        field
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::new(FieldName::Email);
        assert_eq!(field.as_text(), "");
        assert_eq!(field.label, "Email");
        assert!(!field.is_secret);
    }

    #[test]
    fn test_push_and_pop() {
        let mut field = FormField::new(FieldName::FirstName);
        field.push_char('A');
        field.push_char('b');
        assert_eq!(field.as_text(), "Ab");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
        field.clear();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_pop_on_empty_is_noop() {
        let mut field = FormField::new(FieldName::Contact);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_secret_field_is_masked() {
        let field = filled(FieldName::Password, "hunter22");
        assert_eq!(field.display_value(), "••••••••");
    }

    #[test]
    fn test_reveal_shows_plain_text() {
        let mut field = filled(FieldName::ConfirmPassword, "pässword");
        field.toggle_reveal();
        assert_eq!(field.display_value(), "pässword");
        field.toggle_reveal();
        assert_eq!(field.display_value().chars().count(), 8);
    }

    #[test]
    fn test_toggle_reveal_ignored_for_plain_fields() {
        let mut field = filled(FieldName::Email, "a@b.com");
        field.toggle_reveal();
        assert!(!field.revealed);
        assert_eq!(field.display_value(), "a@b.com");
    }
}
