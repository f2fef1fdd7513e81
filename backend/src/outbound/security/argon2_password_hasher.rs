//! Argon2id implementation of the [`PasswordHasher`] port.
//!
//! Digests are PHC strings with a random 16-byte salt. Verification reads the
//! parameters embedded in the stored digest, so cost changes do not lock out
//! existing accounts.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    self, PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::ports::{PasswordHasher, PasswordHasherError};
use crate::domain::{Password, PasswordDigest};

/// Argon2id password hasher.
///
/// # Examples
/// ```
/// use account_api::domain::Password;
/// use account_api::domain::ports::PasswordHasher;
/// use account_api::outbound::security::Argon2PasswordHasher;
///
/// let hasher = Argon2PasswordHasher::with_params(1024, 1, 1).expect("valid params");
/// let digest = hasher.hash(&Password::new("password")).expect("hash");
/// assert!(hasher.verify(&Password::new("password"), &digest).expect("verify"));
/// ```
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Hasher using the crate's recommended Argon2id defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit memory (KiB), iteration and parallelism costs.
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, PasswordHasherError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|err| PasswordHasherError::hash(err.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| PasswordHasherError::hash(err.to_string()))?
            .to_string();
        PasswordDigest::new(encoded).map_err(|err| PasswordHasherError::hash(err.to_string()))
    }

    fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        let parsed = PasswordHash::new(digest.as_str())
            .map_err(|err| PasswordHasherError::malformed_digest(err.to_string()))?;
        match self
            .argon2
            .verify_password(password.expose().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHasherError::hash(err.to_string())),
        }
    }
}
