//! Port for the one-way password derivation function.

use crate::domain::{Password, PasswordDigest};

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hasher adapters.
    pub enum PasswordHasherError {
        /// Deriving a digest failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored digest could not be parsed.
        MalformedDigest { message: String } => "stored password digest is malformed: {message}",
    }
}

/// One-way password hashing.
///
/// Implementations are synchronous; hashing is short, CPU-bound work done
/// inline with the request.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted digest for storage.
    fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError>;

    /// Check `password` against a stored digest. A mismatch is `Ok(false)`.
    fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError>;
}
