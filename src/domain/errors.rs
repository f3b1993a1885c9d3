//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhoneFormat(String),

    /// The provided date does not match `DD.MM.YYYY` or is not a real date.
    InvalidDateFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhoneFormat(phone) => {
                write!(f, "Invalid phone number format: {}", phone)
            }
            Self::InvalidDateFormat(date) => {
                write!(f, "Invalid date format (expected DD.MM.YYYY): {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
