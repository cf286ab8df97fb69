//! Command argument validation utilities
//!
//! Checks on `add` arguments that clap cannot express. They run before any
//! remote call is made.

use anyhow::Result;

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Argument was given but is empty or whitespace only
    EmptyValue { argument: String },
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::EmptyValue { argument } => {
                write!(f, "{} cannot be empty", argument)
            }
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error, keeping it downcastable
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow::Error::new(error)
}

/// Validate the path of the file to add
pub fn validate_file_name(filename: &str) -> Result<()> {
    let trimmed = filename.trim().trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyValue {
                argument: "--file".to_string(),
            },
        ));
    }

    if trimmed.ends_with('/') || trimmed.split('/').any(|part| part == "..") {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--file".to_string(),
                value: filename.to_string(),
                reason: "must be a file path inside the repository".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate a branch name
pub fn validate_branch_name(branch: &str) -> Result<()> {
    if branch.trim().is_empty() {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyValue {
                argument: "--base".to_string(),
            },
        ));
    }

    // Basic Git branch name validation
    if branch.starts_with('-')
        || branch.ends_with('.')
        || branch.ends_with('/')
        || branch.contains("..")
        || branch.contains(char::is_whitespace)
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: "--base".to_string(),
                value: branch.to_string(),
                reason: "invalid Git branch name format".to_string(),
            },
        ));
    }
    Ok(())
}

/// Validate an optional commit message
pub fn validate_commit_message(message: &Option<String>) -> Result<()> {
    if let Some(msg) = message
        && msg.trim().is_empty()
    {
        return Err(validation_error_to_anyhow(
            CommandValidationError::EmptyValue {
                argument: "--message".to_string(),
            },
        ));
    }
    Ok(())
}
