//! In-process registration back-end for offline use

use super::payload::{RegistrationError, RegistrationPayload};
use super::traits::RegistrationService;
use crate::state::Role;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

pub const DUPLICATE_EMAIL: &str = "An account with this email already exists.";

/// A registered account. The password is never kept.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub role: Role,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub contact: String,
    pub registered_at: DateTime<Utc>,
}

/// Accounts shared by every role's registry
#[derive(Debug, Default)]
pub struct AccountBook {
    accounts: Mutex<Vec<Account>>,
}

impl AccountBook {
    #[cfg(test)]
    pub async fn accounts(&self) -> Vec<Account> {
        self.accounts.lock().await.clone()
    }

    async fn insert(&self, role: Role, payload: RegistrationPayload) -> Result<Account, RegistrationError> {
        let mut accounts = self.accounts.lock().await;
        if accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&payload.email))
        {
            return Err(RegistrationError::rejected(409, DUPLICATE_EMAIL));
        }

        let account = Account {
            id: Uuid::new_v4(),
            role,
            email: payload.email,
            first_name: payload.first_name,
            last_name: payload.last_name,
            contact: payload.contact,
            registered_at: Utc::now(),
        };
        accounts.push(account.clone());
        tracing::debug!("Account book now holds {} account(s)", accounts.len());
        Ok(account)
    }
}

/// Registration capability for one role, backed by an [`AccountBook`]
pub struct MemoryRegistry {
    role: Role,
    book: Arc<AccountBook>,
    /// Simulated round-trip time
    latency: Duration,
    error: RwLock<Option<String>>,
    loading: AtomicBool,
}

impl MemoryRegistry {
    pub fn new(role: Role, book: Arc<AccountBook>, latency: Duration) -> Self {
        Self {
            role,
            book,
            latency,
            error: RwLock::new(None),
            loading: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl RegistrationService for MemoryRegistry {
    async fn register(&self, payload: RegistrationPayload) -> Result<(), RegistrationError> {
        self.loading.store(true, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let result = self.book.insert(self.role, payload).await;
        match &result {
            Ok(account) => tracing::info!(
                "Registered {} account {} for {} {} <{}>, contact {}, at {}",
                account.role.noun(),
                account.id,
                account.first_name,
                account.last_name,
                account.email,
                account.contact,
                account.registered_at.to_rfc3339()
            ),
            Err(e) => tracing::debug!("In-memory registration refused: {e}"),
        }
        *self.error.write().await = result.as_ref().err().map(ToString::to_string);

        self.loading.store(false, Ordering::SeqCst);
        result.map(|_| ())
    }

    async fn error_state(&self) -> Option<String> {
        self.error.read().await.clone()
    }

    fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(email: &str) -> RegistrationPayload {
        RegistrationPayload {
            email: email.into(),
            password: "longenough1".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            contact: "1234567890".into(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_account() {
        let book = Arc::new(AccountBook::default());
        let registry = MemoryRegistry::new(Role::Donee, book.clone(), Duration::ZERO);

        registry.register(payload("grace@navy.mil")).await.unwrap();

        let accounts = book.accounts().await;
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].role, Role::Donee);
        assert_eq!(accounts[0].first_name, "Grace");
        assert!(registry.error_state().await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_across_roles() {
        let book = Arc::new(AccountBook::default());
        let donor = MemoryRegistry::new(Role::Donor, book.clone(), Duration::ZERO);
        let manager = MemoryRegistry::new(Role::BloodManager, book.clone(), Duration::ZERO);

        donor.register(payload("grace@navy.mil")).await.unwrap();
        let err = manager
            .register(payload("Grace@Navy.mil"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), DUPLICATE_EMAIL);
        assert_eq!(manager.error_state().await.as_deref(), Some(DUPLICATE_EMAIL));
        assert_eq!(book.accounts().await.len(), 1);
    }

    #[test]
    fn test_book_assigns_distinct_ids() {
        let book = AccountBook::default();
        let (a, b) = tokio_test::block_on(async {
            let a = book.insert(Role::Donor, payload("a@b.com")).await.unwrap();
            let b = book.insert(Role::Donee, payload("c@d.com")).await.unwrap();
            (a, b)
        });
        assert_ne!(a.id, b.id);
        assert!(a.registered_at <= b.registered_at);
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let book = Arc::new(AccountBook::default());
        let registry = MemoryRegistry::new(Role::Donor, book, Duration::ZERO);

        registry.register(payload("a@b.com")).await.unwrap();
        registry.register(payload("a@b.com")).await.unwrap_err();
        assert!(registry.error_state().await.is_some());

        registry.register(payload("c@d.com")).await.unwrap();
        assert!(registry.error_state().await.is_none());
    }

    #[tokio::test]
    async fn test_loading_flag_during_latency() {
        let book = Arc::new(AccountBook::default());
        let registry = Arc::new(MemoryRegistry::new(
            Role::Donor,
            book,
            Duration::from_millis(50),
        ));

        let task = {
            let registry = registry.clone();
            tokio::spawn(async move { registry.register(payload("a@b.com")).await })
        };
        tokio::task::yield_now().await;
        assert!(registry.is_loading());

        task.await.unwrap().unwrap();
        assert!(!registry.is_loading());
    }
}
