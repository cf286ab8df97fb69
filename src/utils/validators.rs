//! Local validation
//!
//! Problems detected before (or instead of) a remote call: missing
//! configuration, an unusable account name, nothing to choose from, or a bad
//! menu selection. These end the run early without an error exit code.

use regex::Regex;
use std::sync::LazyLock;

static ACCOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9_.-]*[A-Za-z0-9])?$").expect("account pattern is valid")
});

/// Enumeration of local validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required configuration value is missing or blank
    MissingConfigValue { field: String, env: String },
    /// Account identifier cannot be used in an API path
    InvalidAccount(String),
    /// The account has no repositories to choose from
    NoRepositories,
    /// Selection is not a number
    InvalidSelection(String),
    /// Selection is outside the menu
    SelectionOutOfRange { selection: usize, count: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingConfigValue { field, env } => write!(
                f,
                "Missing {}: set it in the config file or the {} environment variable",
                field, env
            ),
            ValidationError::InvalidAccount(account) => {
                write!(f, "Invalid account name: '{}'", account)
            }
            ValidationError::NoRepositories => {
                write!(f, "No repositories found for this account")
            }
            ValidationError::InvalidSelection(input) => {
                write!(f, "Invalid selection: '{}' is not a number", input)
            }
            ValidationError::SelectionOutOfRange { selection, count } => write!(
                f,
                "Selection {} is out of range: choose between 1 and {}",
                selection, count
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-blank configuration value and return it trimmed
pub fn validate_config_value<'a>(
    field: &str,
    env: &str,
    value: Option<&'a str>,
) -> Result<&'a str, ValidationError> {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::MissingConfigValue {
            field: field.to_string(),
            env: env.to_string(),
        }),
    }
}

/// Validate an account identifier before it is used in request paths
pub fn validate_account(account: &str) -> Result<(), ValidationError> {
    if ACCOUNT_PATTERN.is_match(account) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAccount(account.to_string()))
    }
}
