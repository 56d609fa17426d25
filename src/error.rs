//! Custom error types for Cashbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashbook operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (ledger file could not be written)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Amount text could not be parsed as a decimal number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Unrecognized transaction type tag
    #[error("Unknown transaction type: {0}")]
    UnknownKind(String),

    /// A persisted record is missing fields or holds bad values
    #[error("Malformed record #{index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a malformed record error for the record at `index`
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.into(),
        }
    }

    /// Check if this is a storage write error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for Cashbook operations
pub type LedgerResult<T> = Result<T, LedgerError>;
