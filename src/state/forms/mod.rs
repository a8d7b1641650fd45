//! Form domain layer
//!
//! Type-safe form handling for the registration view.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{Focus, Form, RegistrationForm};
pub use validation::{validate, ValidationErrors};
