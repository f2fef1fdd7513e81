//! In-memory [`AccountRepository`] adapter keyed by email.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{AccountRepository, AccountRepositoryError};
use crate::domain::{Account, Email};

/// Account store holding records in a map guarded by one lock.
///
/// `insert` holds the write guard across the existence check and the insert,
/// so a given email can only ever be claimed once.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<Email, Account>>,
}

impl InMemoryAccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Whether no account has been stored.
    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn insert(&self, account: Account) -> Result<(), AccountRepositoryError> {
        let mut guard = self.accounts.write().await;
        match guard.entry(account.email().clone()) {
            Entry::Occupied(existing) => Err(AccountRepositoryError::duplicate_email(
                existing.key().as_ref(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountRepositoryError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }
}
