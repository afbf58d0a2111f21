//! Error types for the roster
//!
//! Validation failures and storage failures are kept apart so callers can
//! re-prompt on the former and report the latter.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Unified error type for roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    // -------------------------------------------------------------------------
    // Identifier Errors
    // -------------------------------------------------------------------------
    #[error("Roll number sequence exhausted: {sequence} does not fit in 3 digits")]
    SequenceExhausted { sequence: u64 },
}

impl RosterError {
    /// The validation kind, if this is a validation failure
    pub fn validation_kind(&self) -> Option<ValidationError> {
        match self {
            RosterError::Validation(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// Field validation failures, reported in check order
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Age must be an integer")]
    NonIntegerAge,

    #[error("Gender must be Male, Female, or Other")]
    InvalidGender,

    #[error("Roll No must be in the format 22CSRxxx")]
    InvalidRollNoFormat,
}

/// Failures opening, reading or writing the database
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to open database {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt row: {0}")]
    CorruptRow(String),
}
