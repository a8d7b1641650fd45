//! Registration back-ends and role dispatch

mod client;
mod dispatch;
mod memory;
mod payload;
mod traits;

pub use client::DEFAULT_BASE_URL;
pub use dispatch::{dispatch, report, RoleRegistry, SubmissionOutcome};
pub use payload::RegistrationPayload;

#[cfg(test)]
pub use payload::RegistrationError;
#[cfg(test)]
pub use traits::{MockRegistrationService, RegistrationService};
