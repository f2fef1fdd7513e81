//! Token issuer service implementing [`TokenIssuance`].
//!
//! Unknown emails and wrong passwords produce the same error so callers cannot
//! probe which addresses are registered.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{AccountRepository, PasswordHasher, TokenIssuance, TokenStore};
use crate::domain::{BearerToken, Error, LoginCredentials};

/// Message returned for every authentication failure.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "unable to authenticate with provided credentials";

/// Credential checker and token minter.
#[derive(Clone)]
pub struct TokenIssuerService<R, H, T> {
    accounts: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
}

impl<R, H, T> TokenIssuerService<R, H, T> {
    /// Create an issuer reading accounts from `accounts`.
    pub fn new(accounts: Arc<R>, hasher: Arc<H>, tokens: Arc<T>) -> Self {
        Self {
            accounts,
            hasher,
            tokens,
        }
    }
}

fn rejected() -> Error {
    Error::invalid_credentials(INVALID_CREDENTIALS_MESSAGE)
}

#[async_trait]
impl<R, H, T> TokenIssuance for TokenIssuerService<R, H, T>
where
    R: AccountRepository + 'static,
    H: PasswordHasher + 'static,
    T: TokenStore + 'static,
{
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<BearerToken, Error> {
        let account = self
            .accounts
            .find_by_email(credentials.email())
            .await
            .map_err(|err| {
                error!(error = %err, "account lookup failed during authentication");
                Error::internal(format!("account repository error: {err}"))
            })?;

        let Some(account) = account else {
            debug!("token refused: unknown email");
            return Err(rejected());
        };

        let verified = self
            .hasher
            .verify(credentials.password(), account.password_digest())
            .map_err(|err| {
                error!(error = %err, account_id = %account.id(), "password verification failed");
                Error::internal(format!("password verification failed: {err}"))
            })?;
        if !verified {
            debug!(account_id = %account.id(), "token refused: password mismatch");
            return Err(rejected());
        }

        let token = BearerToken::generate();
        self.tokens
            .record(account.id(), token.digest())
            .await
            .map_err(|err| {
                error!(error = %err, account_id = %account.id(), "failed to record token");
                Error::internal(format!("token store error: {err}"))
            })?;

        info!(account_id = %account.id(), "token issued");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    //! Issuer behaviour against mocked driven ports.
    use super::*;
    use crate::domain::ports::{
        AccountRepositoryError, MockAccountRepository, MockPasswordHasher, MockTokenStore,
    };
    use crate::domain::{Account, AccountId, DisplayName, Email, ErrorCode, PasswordDigest};
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored_account() -> Account {
        Account::new(
            AccountId::random(),
            Email::new("test@gmail.com").expect("email"),
            DisplayName::default(),
            PasswordDigest::new("$argon2id$stub").expect("digest"),
        )
    }

    #[fixture]
    fn credentials() -> LoginCredentials {
        LoginCredentials::try_from_parts("test@gmail.com", "password").expect("credentials")
    }

    fn repository_with(account: Option<Account>) -> MockAccountRepository {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_email()
            .times(1)
            .returning(move |_| Ok(account.clone()));
        accounts
    }

    fn hasher_answering(result: bool) -> MockPasswordHasher {
        let mut hasher = MockPasswordHasher::new();
        hasher
            .expect_verify()
            .times(1)
            .returning(move |_, _| Ok(result));
        hasher
    }

    fn issuer(
        accounts: MockAccountRepository,
        hasher: MockPasswordHasher,
        tokens: MockTokenStore,
    ) -> TokenIssuerService<MockAccountRepository, MockPasswordHasher, MockTokenStore> {
        TokenIssuerService::new(Arc::new(accounts), Arc::new(hasher), Arc::new(tokens))
    }

    #[rstest]
    #[tokio::test]
    async fn issues_and_records_token(stored_account: Account, credentials: LoginCredentials) {
        let expected_owner = stored_account.id();
        let mut tokens = MockTokenStore::new();
        tokens
            .expect_record()
            .withf(move |owner, digest| *owner == expected_owner && digest.as_str().len() == 64)
            .times(1)
            .returning(|_, _| Ok(()));

        let token = issuer(
            repository_with(Some(stored_account)),
            hasher_answering(true),
            tokens,
        )
        .issue_token(&credentials)
        .await
        .expect("token issued");

        assert!(!token.expose().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn wrong_password_is_rejected(stored_account: Account, credentials: LoginCredentials) {
        let mut tokens = MockTokenStore::new();
        tokens.expect_record().never();

        let error = issuer(
            repository_with(Some(stored_account)),
            hasher_answering(false),
            tokens,
        )
        .issue_token(&credentials)
        .await
        .expect_err("mismatch rejected");

        assert_eq!(error.code(), ErrorCode::InvalidCredentials);
        assert_eq!(error.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_email_is_rejected_without_verifying(credentials: LoginCredentials) {
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().never();
        let mut tokens = MockTokenStore::new();
        tokens.expect_record().never();

        let error = issuer(repository_with(None), hasher, tokens)
            .issue_token(&credentials)
            .await
            .expect_err("unknown email rejected");

        assert_eq!(error.code(), ErrorCode::InvalidCredentials);
        assert_eq!(error.message(), INVALID_CREDENTIALS_MESSAGE);
    }

    #[rstest]
    #[tokio::test]
    async fn lookup_failure_is_internal(credentials: LoginCredentials) {
        let mut accounts = MockAccountRepository::new();
        accounts
            .expect_find_by_email()
            .returning(|_| Err(AccountRepositoryError::query("timeout")));

        let error = issuer(accounts, MockPasswordHasher::new(), MockTokenStore::new())
            .issue_token(&credentials)
            .await
            .expect_err("lookup failure surfaces");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }
}
