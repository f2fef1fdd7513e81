//! Domain primitives, services, and ports.
//!
//! Purpose: define strongly typed account and credential types plus the two
//! use-case services (account registry and token issuer). Nothing here knows
//! about HTTP or about the concrete storage and hashing adapters.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Account, Email, DisplayName: the account model.
//! - Password, PasswordPolicy, PasswordDigest: secrets and strength policy.
//! - LoginCredentials, BearerToken: token issuance inputs and outputs.
//! - AccountRegistryService, TokenIssuerService: driving port implementations.

pub mod account;
pub mod account_registry;
pub mod auth;
pub mod error;
pub mod password;
pub mod ports;
pub mod token_issuer;
pub mod trace_id;

pub use self::account::{
    Account, AccountId, AccountProfile, AccountValidationError, DisplayName, Email,
};
pub use self::account_registry::AccountRegistryService;
pub use self::auth::{BearerToken, LoginCredentials, LoginValidationError, TokenDigest};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::password::{
    DEFAULT_MIN_PASSWORD_LENGTH, EmptyDigestError, Password, PasswordDigest, PasswordPolicy,
    PasswordPolicyError,
};
pub use self::token_issuer::{INVALID_CREDENTIALS_MESSAGE, TokenIssuerService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
