//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Every variant is recoverable from the
//! user's point of view; nothing here is fatal to the process.

use thiserror::Error;

/// The main error type for expense ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Amount missing, non-numeric, non-finite, or not greater than zero
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The key-value store rejected a write, or the stored list could not be read
    #[error("Failed to save expenses: {0}")]
    StorageWriteFailed(String),

    /// Persisted data was present but could not be parsed
    #[error("Stored expenses are corrupt: {0}")]
    StorageCorrupt(String),

    /// Export requested with no expenses recorded
    #[error("No expenses to export")]
    EmptyExport,

    /// Input rejected by a command (bad date, missing confirmation)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors other than an empty ledger
    #[error("Export error: {0}")]
    Export(String),

    /// An id prefix matched more than one expense
    #[error("Ambiguous expense id '{0}': matches more than one expense")]
    AmbiguousId(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl LedgerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::InvalidAmount("-5".into());
        assert_eq!(err.to_string(), "Invalid amount: -5");
        assert_eq!(LedgerError::EmptyExport.to_string(), "No expenses to export");
    }

    #[test]
    fn test_not_found_error() {
        let err = LedgerError::expense_not_found("abc123");
        assert_eq!(err.to_string(), "Expense not found: abc123");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
