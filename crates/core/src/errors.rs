//! Core error types for the Sentra CRM application.
//!
//! This module defines store-agnostic error types. Transport-specific errors
//! (HTTP status codes, CSV parse failures from the sheet layer, etc.) are
//! converted to these types by the collaborating crates.

use chrono::ParseError as ChronoParseError;
use std::num::ParseIntError;
use thiserror::Error;

use sentra_sheets::SheetError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the CRM application.
///
/// Per-record data problems (bad dates, missing optional fields) never reach
/// this type: ingestion and classification drop them silently. Errors here
/// correspond to explicit user actions that failed and must be surfaced.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Spreadsheet operation failed: {0}")]
    Sheet(#[from] SheetError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Message composition failed: {0}")]
    Compose(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for the managed-backend repositories.
///
/// Variants carry `String` details so the backend crate can map HTTP and
/// payload errors into this format without leaking transport types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to reach the backend at all.
    #[error("Failed to connect to backend: {0}")]
    ConnectionFailed(String),

    /// A backend query failed to execute.
    #[error("Backend query failed: {0}")]
    QueryFailed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// A versioned upsert lost the revision race. The caller holds a stale
    /// revision and must re-read before saving again.
    #[error("Revision conflict: {0}")]
    Conflict(String),

    /// Internal/unexpected backend error.
    #[error("Internal backend error: {0}")]
    Internal(String),
}

/// Validation errors for user input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseIntError),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

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
