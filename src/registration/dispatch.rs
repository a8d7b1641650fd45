//! Role-based dispatch of registration requests

use super::client::RegistrationClient;
use super::memory::{AccountBook, MemoryRegistry};
use super::payload::RegistrationPayload;
use super::traits::RegistrationService;
use crate::state::{NotificationSink, Role, ToastOptions};
use std::sync::Arc;
use std::time::Duration;

/// Shown when a call fails without saying why
const UNKNOWN_FAILURE: &str = "Registration failed.";

/// One registration capability per role
#[derive(Clone)]
pub struct RoleRegistry {
    donor: Arc<dyn RegistrationService>,
    donee: Arc<dyn RegistrationService>,
    manager: Arc<dyn RegistrationService>,
}

impl RoleRegistry {
    pub fn new(
        donor: Arc<dyn RegistrationService>,
        donee: Arc<dyn RegistrationService>,
        manager: Arc<dyn RegistrationService>,
    ) -> Self {
        Self {
            donor,
            donee,
            manager,
        }
    }

    /// Capabilities backed by the REST API at `base_url`
    pub fn http(base_url: &str) -> Self {
        let http = reqwest::Client::new();
        let make = |role| -> Arc<dyn RegistrationService> {
            Arc::new(RegistrationClient::new(http.clone(), base_url, role))
        };
        Self::new(make(Role::Donor), make(Role::Donee), make(Role::BloodManager))
    }

    /// Offline capabilities sharing one in-memory account book
    pub fn memory(latency: Duration) -> Self {
        let book = Arc::new(AccountBook::default());
        let make = |role| -> Arc<dyn RegistrationService> {
            Arc::new(MemoryRegistry::new(role, book.clone(), latency))
        };
        Self::new(make(Role::Donor), make(Role::Donee), make(Role::BloodManager))
    }

    pub fn service(&self, role: Role) -> Arc<dyn RegistrationService> {
        match role {
            Role::Donor => self.donor.clone(),
            Role::Donee => self.donee.clone(),
            Role::BloodManager => self.manager.clone(),
        }
    }

    pub fn any_loading(&self) -> bool {
        Role::ALL.iter().any(|role| self.service(*role).is_loading())
    }
}

/// Result of one submission, as seen by the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Registered { role: Role },
    Failed { role: Role, message: String },
}

impl SubmissionOutcome {
    pub fn role(&self) -> Role {
        match self {
            Self::Registered { role } | Self::Failed { role, .. } => *role,
        }
    }
}

/// Invoke the capability for `role` and settle the outcome.
///
/// An error reported by the call itself wins over the service's error slot,
/// which is sampled only after the call returns.
pub async fn dispatch(
    registry: &RoleRegistry,
    role: Role,
    payload: RegistrationPayload,
) -> SubmissionOutcome {
    let service = registry.service(role);
    let result = service.register(payload).await;
    let slot = service.error_state().await.filter(|m| !m.is_empty());

    let message = match result {
        Err(e) => {
            let from_call = e.to_string();
            if from_call.is_empty() {
                Some(slot.unwrap_or_else(|| UNKNOWN_FAILURE.to_string()))
            } else {
                Some(from_call)
            }
        }
        Ok(()) => slot,
    };

    match message {
        Some(message) => SubmissionOutcome::Failed { role, message },
        None => SubmissionOutcome::Registered { role },
    }
}

/// Surface an outcome to the user. Failures produce exactly one
/// notification; returns true when the registration went through.
pub fn report(
    outcome: &SubmissionOutcome,
    sink: &mut dyn NotificationSink,
    options: ToastOptions,
) -> bool {
    match outcome {
        SubmissionOutcome::Registered { role } => {
            tracing::info!("{} registration accepted", role.noun());
            true
        }
        SubmissionOutcome::Failed { role, message } => {
            tracing::warn!("{} registration failed: {message}", role.noun());
            sink.notify(message, options);
            false
        }
    }
}
