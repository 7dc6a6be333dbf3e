//! Custom error types for the finance tracker
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Ledger failures are all recoverable and
//! carry a message suitable for showing to the user.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TransactionId;

/// Coarse classification of ledger failures for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    InvalidAmount,
    NoSelection,
    IndexOutOfRange,
    Other,
}

/// The main error type for finance tracker operations
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A required input field was empty or absent
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// An amount could not be parsed, or was negative
    #[error("Invalid amount: '{0}' (expected a non-negative number)")]
    InvalidAmount(String),

    /// Removal requested without a selected entry
    #[error("No transaction selected")]
    NoSelection,

    /// Removal position is past the end of the sequence
    #[error("Index {index} is out of range ({len} transactions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No transaction with this handle is stored
    #[error("Transaction not found: {0}")]
    TransactionNotFound(TransactionId),

    /// Two persisted records share a handle
    #[error("Duplicate transaction id: {0}")]
    DuplicateTransaction(TransactionId),

    /// The ledger file exists but does not hold a valid ledger
    #[error("Ledger file {} is invalid: {reason}", .path.display())]
    CorruptLedger { path: PathBuf, reason: String },

    /// The ledger file was written by a newer release
    #[error(
        "Ledger file {} uses schema {found}, newer than the supported {supported}",
        .path.display()
    )]
    UnsupportedSchema {
        path: PathBuf,
        found: u32,
        supported: u32,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FinanceError {
    /// Create a "missing field" error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an "invalid amount" error for the given raw input
    pub fn invalid_amount(raw: impl Into<String>) -> Self {
        Self::InvalidAmount(raw.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::NoSelection => ErrorKind::NoSelection,
            Self::IndexOutOfRange { .. } | Self::TransactionNotFound(_) => {
                ErrorKind::IndexOutOfRange
            }
            _ => ErrorKind::Other,
        }
    }
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finance tracker operations
pub type FinanceResult<T> = Result<T, FinanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinanceError::missing("category");
        assert_eq!(err.to_string(), "Missing required field: category");

        let err = FinanceError::invalid_amount("abc");
        assert_eq!(
            err.to_string(),
            "Invalid amount: 'abc' (expected a non-negative number)"
        );

        let err = FinanceError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Index 5 is out of range (2 transactions)");
    }

    #[test]
    fn test_kind() {
        assert_eq!(FinanceError::NoSelection.kind(), ErrorKind::NoSelection);
        assert_eq!(
            FinanceError::missing("date").kind(),
            ErrorKind::MissingField
        );
        assert_eq!(
            FinanceError::TransactionNotFound(TransactionId::new()).kind(),
            ErrorKind::IndexOutOfRange
        );
        assert_eq!(FinanceError::Config("x".into()).kind(), ErrorKind::Other);
    }

    #[test]
    fn test_ledger_file_errors_name_the_file() {
        let err = FinanceError::UnsupportedSchema {
            path: PathBuf::from("data/ledger.json"),
            found: 3,
            supported: 1,
        };
        assert_eq!(
            err.to_string(),
            "Ledger file data/ledger.json uses schema 3, newer than the supported 1"
        );
        assert_eq!(err.kind(), ErrorKind::Other);

        let err = FinanceError::CorruptLedger {
            path: PathBuf::from("ledger.json"),
            reason: "expected value".into(),
        };
        assert_eq!(err.to_string(), "Ledger file ledger.json is invalid: expected value");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinanceError = io_err.into();
        assert!(matches!(err, FinanceError::Io(_)));
    }
}
