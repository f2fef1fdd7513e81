//! Port recording which bearer tokens have been issued.

use async_trait::async_trait;

use crate::domain::{AccountId, TokenDigest};

use super::define_port_error;

define_port_error! {
    /// Failures raised by token store adapters.
    pub enum TokenStoreError {
        /// The backing store rejected the write.
        Write { message: String } => "token store write failed: {message}",
    }
}

/// Store of issued token digests. Plaintext tokens never reach this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Record that `digest` was issued to `account`.
    async fn record(&self, account: AccountId, digest: TokenDigest) -> Result<(), TokenStoreError>;
}
