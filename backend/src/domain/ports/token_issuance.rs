//! Driving port for bearer-token issuance.

use async_trait::async_trait;

use crate::domain::{BearerToken, Error, LoginCredentials};

/// Domain use-case port for exchanging credentials for a token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenIssuance: Send + Sync {
    /// Authenticate `credentials` and mint a new bearer token.
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<BearerToken, Error>;
}
