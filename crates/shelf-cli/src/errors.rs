//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so scripts can tell a missing
//! entry apart from bad input or an unreadable collection.

use std::fmt;

use shelf_core::ShelfError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Entry (or other resource) not found
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput(String),

    /// The saved collection could not be read
    LoadFailed { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::LoadFailed { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn load_failed(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::LoadFailed {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::LoadFailed { .. } => exit_codes::LOAD_FAILED,
        }
    }
}

/// Translate a core error into the CLI error carrying the matching exit code.
pub fn from_core(err: ShelfError) -> anyhow::Error {
    match err {
        ShelfError::NotFound(what) => CliError::not_found(
            format!("{} not found", what),
            "Hint: Run `shelf list` to find entry IDs.",
        )
        .into(),
        ShelfError::Validation(message) => CliError::invalid_input(message).into(),
        ShelfError::LoadParse(message) => CliError::load_failed(
            format!("Your saved entries could not be read: {}", message),
            "Hint: Fix or move the collection file aside, then try again.",
        )
        .into(),
        other => anyhow::Error::new(other),
    }
}

/// Exit code for an error returned from a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>()
        .map(CliError::exit_code)
        .unwrap_or(1)
}
