//! Trait abstraction for registration back-ends to enable mocking in tests

use super::payload::{RegistrationError, RegistrationPayload};
use async_trait::async_trait;

/// One role's registration capability
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Submit a new account
    async fn register(&self, payload: RegistrationPayload) -> Result<(), RegistrationError>;

    /// Message from the most recent failed call, if any
    async fn error_state(&self) -> Option<String>;

    /// Whether a call is currently outstanding
    fn is_loading(&self) -> bool;
}
