//! Core error types for the GiveOne ledger.
//!
//! This module defines storage-agnostic error types. File-specific errors
//! (I/O, JSON) are converted to these types by the storage layer.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Persistence failed: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),
}

/// Validation errors for user input and ledger rules.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Amount must be greater than 0 (got {0})")]
    NonPositiveAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("An account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Case {0} not found")]
    UnknownCase(u32),

    #[error("Case {0} is already funded")]
    CaseAlreadyFunded(u32),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Errors raised while reading or writing the ledger document.
///
/// Details are carried as strings so the storage layer can convert I/O and
/// serde errors into this format.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to read ledger file: {0}")]
    ReadFailed(String),

    #[error("Failed to write ledger file: {0}")]
    WriteFailed(String),

    #[error("Failed to (de)serialize ledger document: {0}")]
    Serialization(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("No local user found. Please create an account.")]
    NoUser,

    #[error("Email or password is incorrect.")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persistence(PersistenceError::Serialization(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

impl Error {
    /// Returns true when the error is a rejected input rather than a failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}
