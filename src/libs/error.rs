//! Error types shared by the date, validation, store and service layers.
//!
//! Each layer has its own error so callers can tell an input problem from a
//! storage failure:
//!
//! - [`ParseError`]: date text that does not match the expected pattern
//! - [`ValidationError`]: a registration or status change that breaks a rule
//! - [`StoreError`]: SQLite or filesystem failure, including constraint checks
//! - [`AgendaError`]: what the service layer returns (validation or store)

use rusqlite::ErrorCode;
use thiserror::Error;

/// Date text that could not be read as a timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date '{input}', expected {expected}")]
pub struct ParseError {
    /// The offending text, as received.
    pub input: String,
    /// Human description of the expected pattern.
    pub expected: &'static str,
}

/// A business rule violated by a registration or status change request.
///
/// The variant is the reason. Registration checks stop at the first failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Task name is required")]
    MissingName,

    #[error("Task type is required")]
    MissingType,

    #[error("Start date is required")]
    MissingStart,

    #[error("Start date is invalid: {0}")]
    InvalidStart(ParseError),

    #[error("End date is required")]
    MissingEnd,

    #[error("End date is invalid: {0}")]
    InvalidEnd(ParseError),

    #[error("Invalid status '{0}', use 'done' or 'not_done'")]
    InvalidStatus(String),

    #[error("End date cannot be earlier than start date")]
    EndBeforeStart,
}

/// Failures raised by the task store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite rejected a row (status outside its domain, missing column value).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Any other SQLite failure.
    #[error("Storage error: {0}")]
    Sqlite(rusqlite::Error),

    /// The database directory could not be created.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(ffi_err, message) = &err {
            if ffi_err.code == ErrorCode::ConstraintViolation {
                return Self::ConstraintViolation(message.clone().unwrap_or_else(|| ffi_err.to_string()));
            }
        }
        Self::Sqlite(err)
    }
}

/// Errors returned by [`crate::libs::service::TaskService`].
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
