//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`AccountRegistration`], [`TokenIssuance`]) are called by
//! inbound adapters. Driven ports ([`AccountRepository`], [`PasswordHasher`],
//! [`TokenStore`]) are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod account_registration;
mod account_repository;
mod password_hasher;
mod token_issuance;
mod token_store;

#[cfg(test)]
pub use account_registration::MockAccountRegistration;
pub use account_registration::{AccountRegistration, RegistrationRequest};
#[cfg(test)]
pub use account_repository::MockAccountRepository;
pub use account_repository::{AccountRepository, AccountRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use token_issuance::MockTokenIssuance;
pub use token_issuance::TokenIssuance;
#[cfg(test)]
pub use token_store::MockTokenStore;
pub use token_store::{TokenStore, TokenStoreError};
