//! Password secrets, the strength policy, and derived digests.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

/// Default minimum password length, in characters.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 5;

/// Plaintext password supplied by a caller.
///
/// The buffer is wiped on drop and `Debug` never prints the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap caller input verbatim. Whitespace is significant.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(Zeroizing::new(raw.into()))
    }

    /// Borrow the plaintext for hashing or verification.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the caller sent an empty password.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Reasons a password fails the strength policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password shorter than the configured minimum.
    #[error("password must be at least {min} characters")]
    TooShort { min: usize },
}

/// Minimum-strength policy applied at registration.
///
/// # Examples
/// ```
/// use account_api::domain::{Password, PasswordPolicy, PasswordPolicyError};
///
/// let policy = PasswordPolicy::new(5);
/// assert!(policy.check(&Password::new("password")).is_ok());
/// assert_eq!(
///     policy.check(&Password::new("oop")),
///     Err(PasswordPolicyError::TooShort { min: 5 })
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl PasswordPolicy {
    /// Policy requiring at least `min_length` characters.
    pub const fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Configured minimum length.
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Validate `password` against the policy.
    pub fn check(&self, password: &Password) -> Result<(), PasswordPolicyError> {
        if password.char_count() < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
            });
        }
        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PASSWORD_LENGTH)
    }
}

/// Error raised when a stored digest string is blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password digest must not be empty")]
pub struct EmptyDigestError;

/// One-way derived password hash in PHC string form.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Wrap a digest produced by a password hasher.
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyDigestError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmptyDigestError);
        }
        Ok(Self(raw))
    }

    /// Borrow the encoded digest.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(<redacted>)")
    }
}
