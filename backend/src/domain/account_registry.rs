//! Account registry service implementing [`AccountRegistration`].
//!
//! Validation runs in a fixed order (email, name, password policy) before any
//! hashing happens; uniqueness is decided by the repository's atomic insert.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info};

use crate::domain::ports::{
    AccountRegistration, AccountRepository, AccountRepositoryError, PasswordHasher,
    RegistrationRequest,
};
use crate::domain::{
    Account, AccountId, AccountProfile, AccountValidationError, DisplayName, Email, Error,
    Password, PasswordPolicy, PasswordPolicyError,
};

/// Registration service wired to a repository and a password hasher.
#[derive(Clone)]
pub struct AccountRegistryService<R, H> {
    accounts: Arc<R>,
    hasher: Arc<H>,
    policy: PasswordPolicy,
}

impl<R, H> AccountRegistryService<R, H> {
    /// Create a registry enforcing `policy`.
    pub fn new(accounts: Arc<R>, hasher: Arc<H>, policy: PasswordPolicy) -> Self {
        Self {
            accounts,
            hasher,
            policy,
        }
    }
}

fn field_error(message: String, field: &str, code: &str) -> Error {
    Error::invalid_request(message).with_details(json!({ "field": field, "code": code }))
}

fn map_account_validation_error(err: AccountValidationError) -> Error {
    let message = err.to_string();
    match err {
        AccountValidationError::EmptyEmail => field_error(message, "email", "missing_field"),
        AccountValidationError::EmailTooLong { .. } => {
            field_error(message, "email", "email_too_long")
        }
        AccountValidationError::MalformedEmail => field_error(message, "email", "invalid_email"),
        AccountValidationError::DisplayNameTooLong { .. } => {
            field_error(message, "name", "name_too_long")
        }
    }
}

fn map_policy_error(err: PasswordPolicyError) -> Error {
    let message = err.to_string();
    match err {
        PasswordPolicyError::TooShort { min } => Error::invalid_request(message)
            .with_details(json!({
                "field": "password",
                "code": "password_too_short",
                "minLength": min,
            })),
    }
}

fn map_repository_error(err: AccountRepositoryError) -> Error {
    match err {
        AccountRepositoryError::DuplicateEmail { .. } => field_error(
            "an account with this email already exists".to_owned(),
            "email",
            "email_taken",
        ),
        other => {
            error!(error = %other, "account repository failure during registration");
            Error::internal(format!("account repository error: {other}"))
        }
    }
}

#[async_trait]
impl<R, H> AccountRegistration for AccountRegistryService<R, H>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
{
    async fn register(&self, request: RegistrationRequest) -> Result<AccountProfile, Error> {
        let RegistrationRequest {
            email,
            password,
            name,
        } = request;

        let email = Email::for_registration(email).map_err(map_account_validation_error)?;
        let name = name
            .map(DisplayName::new)
            .transpose()
            .map_err(map_account_validation_error)?
            .unwrap_or_default();
        let password = Password::new(password);
        if password.is_empty() {
            return Err(field_error(
                "password must not be empty".to_owned(),
                "password",
                "missing_field",
            ));
        }
        self.policy.check(&password).map_err(map_policy_error)?;

        let digest = self.hasher.hash(&password).map_err(|err| {
            error!(error = %err, "password hashing failed during registration");
            Error::internal(format!("password hashing failed: {err}"))
        })?;

        let account = Account::new(AccountId::random(), email, name, digest);
        let profile = account.profile();
        let id = account.id();
        self.accounts
            .insert(account)
            .await
            .map_err(map_repository_error)?;

        info!(account_id = %id, "account registered");
        Ok(profile)
    }
}
