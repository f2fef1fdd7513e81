//! Driving port for account registration.
//!
//! Inbound adapters call this port to create accounts without knowing the
//! storage or hashing infrastructure behind it.

use async_trait::async_trait;

use crate::domain::{AccountProfile, Error};

/// Typed registration input as received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

/// Domain use-case port for creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRegistration: Send + Sync {
    /// Validate and persist a new account, returning its public fields.
    async fn register(&self, request: RegistrationRequest) -> Result<AccountProfile, Error>;
}
