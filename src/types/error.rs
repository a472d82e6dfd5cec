//! Error types for the Transaction Reporter
//!
//! This module defines all error conditions that can occur while loading,
//! aggregating and writing transaction data.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parse Errors**: Malformed CSV or JSON input
//! - **Malformed-record Errors**: An amount that cannot be coerced to a
//!   number; raised by the engine's update operations and aborts the
//!   current batch at the failing record
//! - **Unknown-key Lookup Errors**: Querying statistics for a transaction
//!   type that was never observed

use thiserror::Error;

/// Main error type for the transaction reporter
///
/// Each variant carries enough context to diagnose the failure from CLI
/// output. The engine never recovers from these locally; they propagate
/// synchronously to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// Input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Malformed CSV or JSON input
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
    },

    /// Amount field not coercible to a number
    ///
    /// Raised by the engine update operation that first touches the amount.
    /// Prior records' effects remain applied; there is no rollback.
    #[error("Invalid amount '{amount}' for transaction {id}")]
    InvalidAmount {
        /// The raw amount string
        amount: String,
        /// Transaction identifier
        id: String,
    },

    /// Statistics queried for a transaction type never observed
    ///
    /// Read-only queries do not lazily create entries the way the update
    /// operations do; an absent entry is reported instead of defaulting to
    /// a zeroed result.
    #[error("No statistics recorded for transaction type '{kind}'")]
    StatisticsNotFound {
        /// The transaction type label
        kind: String,
    },
}

impl From<std::io::Error> for ReportError {
    fn from(error: std::io::Error) -> Self {
        ReportError::Io {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ReportError {
    fn from(error: csv::Error) -> Self {
        // Include the line number when the csv crate knows it
        let message = match error.position() {
            Some(position) => format!("line {}: {}", position.line(), error),
            None => error.to_string(),
        };
        ReportError::Parse { message }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(error: serde_json::Error) -> Self {
        ReportError::Parse {
            message: error.to_string(),
        }
    }
}

// Helper constructors for errors built from borrowed context

impl ReportError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        ReportError::FileNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, id: &str) -> Self {
        ReportError::InvalidAmount {
            amount: amount.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a StatisticsNotFound error
    pub fn statistics_not_found(kind: &str) -> Self {
        ReportError::StatisticsNotFound {
            kind: kind.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        ReportError::FileNotFound { path: "input.csv".to_string() },
        "File not found: input.csv"
    )]
    #[case::io(
        ReportError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse(
        ReportError::Parse { message: "line 3: invalid record".to_string() },
        "Parse error: line 3: invalid record"
    )]
    #[case::invalid_amount(
        ReportError::InvalidAmount { amount: "abc".to_string(), id: "7".to_string() },
        "Invalid amount 'abc' for transaction 7"
    )]
    #[case::statistics_not_found(
        ReportError::StatisticsNotFound { kind: "transfer".to_string() },
        "No statistics recorded for transaction type 'transfer'"
    )]
    fn test_error_display(#[case] error: ReportError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        ReportError::invalid_amount("abc", "7"),
        ReportError::InvalidAmount { amount: "abc".to_string(), id: "7".to_string() }
    )]
    #[case::statistics_not_found(
        ReportError::statistics_not_found("transfer"),
        ReportError::StatisticsNotFound { kind: "transfer".to_string() }
    )]
    #[case::file_not_found(
        ReportError::file_not_found("input.csv"),
        ReportError::FileNotFound { path: "input.csv".to_string() }
    )]
    fn test_helper_constructors(#[case] result: ReportError, #[case] expected: ReportError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ReportError = io_error.into();
        assert!(matches!(error, ReportError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ReportError = json_error.into();
        assert!(matches!(error, ReportError::Parse { .. }));
    }
}
