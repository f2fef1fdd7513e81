//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountRegistration, TokenIssuance};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use account_api::domain::{AccountRegistryService, PasswordPolicy, TokenIssuerService};
/// use account_api::inbound::http::state::HttpState;
/// use account_api::outbound::persistence::{InMemoryAccountRepository, InMemoryTokenStore};
/// use account_api::outbound::security::Argon2PasswordHasher;
///
/// let accounts = Arc::new(InMemoryAccountRepository::new());
/// let hasher = Arc::new(Argon2PasswordHasher::new());
/// let state = HttpState::new(
///     Arc::new(AccountRegistryService::new(
///         accounts.clone(),
///         hasher.clone(),
///         PasswordPolicy::default(),
///     )),
///     Arc::new(TokenIssuerService::new(
///         accounts,
///         hasher,
///         Arc::new(InMemoryTokenStore::new()),
///     )),
/// );
/// let _registration = state.registration.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Account creation use case.
    pub registration: Arc<dyn AccountRegistration>,
    /// Credential exchange use case.
    pub tokens: Arc<dyn TokenIssuance>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    pub fn new(registration: Arc<dyn AccountRegistration>, tokens: Arc<dyn TokenIssuance>) -> Self {
        Self {
            registration,
            tokens,
        }
    }
}
