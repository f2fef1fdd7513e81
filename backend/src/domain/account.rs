//! Account data model.
//!
//! Accounts are keyed by email address. The stored password is only ever the
//! derived digest held in [`PasswordDigest`]; the public projection
//! ([`AccountProfile`]) carries no secret at all.

use std::fmt;

use uuid::Uuid;

use super::PasswordDigest;

/// Maximum length, in characters, of an email address.
pub const EMAIL_MAX: usize = 255;
/// Maximum length, in characters, of a display name.
pub const DISPLAY_NAME_MAX: usize = 255;

/// Validation errors raised while building account fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Email exceeds `max` characters.
    EmailTooLong { max: usize },
    /// Email is not of the form `local@domain`.
    MalformedEmail,
    /// Display name exceeds `max` characters.
    DisplayNameTooLong { max: usize },
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => {
                write!(f, "email must be at most {max} characters")
            }
            Self::MalformedEmail => write!(f, "email must be a valid address"),
            Self::DisplayNameTooLong { max } => {
                write!(f, "name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Stable account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(Uuid);

impl AccountId {
    /// Generate a new random [`AccountId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Email address used as the unique account key.
///
/// ## Invariants
/// - Surrounding whitespace is trimmed; the remainder is non-empty.
/// - Comparison is case-sensitive.
///
/// [`Email::new`] only enforces presence, which is all a credential lookup
/// needs. [`Email::for_registration`] additionally checks the address shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Build an email key from caller input, requiring only that it is present.
    ///
    /// # Examples
    /// ```
    /// use account_api::domain::Email;
    ///
    /// let email = Email::new("  one  ").expect("present");
    /// assert_eq!(email.as_ref(), "one");
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Build an email for a new account, validating length and address shape.
    ///
    /// # Examples
    /// ```
    /// use account_api::domain::{AccountValidationError, Email};
    ///
    /// assert!(Email::for_registration("test@gmail.com").is_ok());
    /// assert_eq!(
    ///     Email::for_registration("one"),
    ///     Err(AccountValidationError::MalformedEmail)
    /// );
    /// ```
    pub fn for_registration(raw: impl AsRef<str>) -> Result<Self, AccountValidationError> {
        let email = Self::new(raw)?;
        if email.0.chars().count() > EMAIL_MAX {
            return Err(AccountValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !has_address_shape(&email.0) {
            return Err(AccountValidationError::MalformedEmail);
        }
        Ok(email)
    }
}

fn has_address_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Display name attached to an account. Empty when the caller supplied none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(raw: impl Into<String>) -> Result<Self, AccountValidationError> {
        let name = raw.into().trim().to_owned();
        if name.chars().count() > DISPLAY_NAME_MAX {
            return Err(AccountValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        Ok(Self(name))
    }

    /// Whether no name was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

/// Stored account record.
///
/// ## Invariants
/// - `password` is a one-way digest; the plaintext is never held here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    email: Email,
    name: DisplayName,
    password: PasswordDigest,
}

impl Account {
    /// Build an account from validated components.
    pub fn new(id: AccountId, email: Email, name: DisplayName, password: PasswordDigest) -> Self {
        Self {
            id,
            email,
            name,
            password,
        }
    }

    /// Stable account identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Unique email key.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Display name, possibly empty.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Derived password digest used for verification.
    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password
    }

    /// Public projection without any secret material.
    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// Non-secret account fields returned to callers after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountProfile {
    /// Registered email key.
    pub email: Email,
    /// Display name, empty when none was given.
    pub name: DisplayName,
}
