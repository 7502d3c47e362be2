//! Core error types for the Baydesk application.
//!
//! This module defines backend-agnostic error types. HTTP-specific errors
//! (from reqwest, status codes, etc.) are converted to these types by the
//! connect layer.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the back-office client.
///
/// Transport-specific errors are wrapped in string form to keep this type
/// independent of the HTTP stack.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-success status. The message is the
    /// best human-readable detail extracted from the response body.
    #[error("API error: {0}")]
    Api(String),

    /// The request never produced a usable response (connect failure,
    /// timeout, malformed body).
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("A {0} sync is already in progress")]
    SyncInFlight(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Secret store error: {0}")]
    Secret(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
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
