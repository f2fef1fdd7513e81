//! Port abstraction for account persistence adapters and their errors.
//!
//! The uniqueness of email addresses is the adapter's responsibility:
//! [`AccountRepository::insert`] must check and insert atomically so that two
//! racing registrations for one address cannot both succeed.

use async_trait::async_trait;

use crate::domain::{Account, Email};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by account repository adapters.
    pub enum AccountRepositoryError {
        /// An account with the same email already exists.
        DuplicateEmail { email: String } => "an account already exists for {email}",
        /// Repository connection could not be established.
        Connection { message: String } => "account repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "account repository query failed: {message}",
    }
}

/// Storage port for accounts keyed by email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persist a new account, failing with
    /// [`AccountRepositoryError::DuplicateEmail`] if the email is taken.
    async fn insert(&self, account: Account) -> Result<(), AccountRepositoryError>;

    /// Fetch an account by its exact email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Account>, AccountRepositoryError>;
}
