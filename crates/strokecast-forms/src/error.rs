//! Form error types

use thiserror::Error;

/// Form result type
pub type Result<T> = std::result::Result<T, FormError>;

/// Form errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown field '{field}' for form '{form}'")]
    UnknownField { form: String, field: String },

    #[error("Unknown form variant '{0}' (expected 'demographic' or 'vitals')")]
    UnknownVariant(String),

    #[error("Invalid assignment '{0}': expected NAME=VALUE")]
    InvalidAssignment(String),
}
