//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Value-object validation errors live in [`crate::domain::ValidationError`] and are
//! lifted into [`CommandError::InvalidValue`] at the handler boundary.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors a command handler can return.
///
/// None of these stop the bot: the REPL turns each one into a fixed line of
/// text for the operator and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Missing argument for command")]
    MissingArgument,

    /// A field failed validation
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValidationError),

    /// An argument was malformed or extra arguments were supplied
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A positional lookup went past the end of a sequence
    #[error("Index out of range")]
    LookupIndex,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
