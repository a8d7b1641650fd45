//! Data sent to, and errors returned by, registration back-ends

use serde::Serialize;
use thiserror::Error;

/// Account details submitted for registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
}

/// Why a registration did not go through. The display text is shown to the
/// user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// The back-end answered and refused the account
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The back-end could not be reached
    #[error("{0}")]
    Transport(String),
}

impl RegistrationError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }
}
