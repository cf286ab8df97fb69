//! Validated credentials for a run

use crate::utils::validators::{self, ValidationError};
use crate::constants::config::{ACCOUNT_ENV, TOKEN_ENV};

/// Bearer token and account identifier, checked once at startup
///
/// Immutable after construction. The token never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    account: String,
}

impl Credentials {
    /// Validate and build credentials
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if either value is missing or blank, or if
    /// the account is not a valid GitHub login.
    pub fn new(token: Option<&str>, account: Option<&str>) -> Result<Self, ValidationError> {
        let token = validators::validate_config_value("token", TOKEN_ENV, token)?;
        let account = validators::validate_config_value("account", ACCOUNT_ENV, account)?;
        validators::validate_account(account)?;

        Ok(Self {
            token: token.to_string(),
            account: account.to_string(),
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn account(&self) -> &str {
        &self.account
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"***")
            .field("account", &self.account)
            .finish()
    }
}
