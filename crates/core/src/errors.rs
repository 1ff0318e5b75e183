//! Core error types for the quotation engine.
//!
//! This module defines storage-agnostic error types. Errors raised by the
//! persistence layer are converted to [`DatabaseError`] by that layer before
//! they reach the services defined here.

use chrono::{NaiveDate, ParseError as ChronoParseError};
use thiserror::Error;

use crate::quotes::QuoteStatus;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the quotation engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Missing association: {0}")]
    MissingAssociation(String),

    #[error("Cost calculation failed: {0}")]
    Calculation(#[from] CalculatorError),

    #[error("Quote error: {0}")]
    Quote(#[from] QuoteError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Storage-agnostic error type reported by repository implementations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// A database query failed to execute.
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A unique constraint was violated (e.g., duplicate name).
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// A foreign key constraint was violated.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),
}

/// Errors raised while pricing a project.
#[derive(Error, Debug)]
pub enum CalculatorError {
    #[error("Arithmetic overflow while pricing component '{component}'")]
    Overflow { component: String },

    #[error("Failed to price project '{project}': {reason}")]
    ProjectCost { project: String, reason: String },

    #[error("Date out of range: cannot add {months} month(s) to {date}")]
    InvalidDate { date: NaiveDate, months: u32 },
}

/// Quote lifecycle violations.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Quote {id} expired on {validity_date}")]
    Expired { id: String, validity_date: NaiveDate },

    #[error("Quote {id} is already {status}")]
    AlreadyDecided { id: String, status: QuoteStatus },
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

/// Shorthand for an `InvalidInput` validation error.
pub(crate) fn invalid_input(message: impl Into<String>) -> Error {
    Error::Validation(ValidationError::InvalidInput(message.into()))
}
