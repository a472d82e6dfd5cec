//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Input transaction record and kind classification
//! - `summary`: Derived views (account summaries, type statistics) and
//!   the filter's field/mode types
//! - `error`: Error types for the transaction reporter

pub mod error;
pub mod summary;
pub mod transaction;

pub use error::ReportError;
pub use summary::{AccountSummary, FilterMode, SummaryField, TypeStatistics};
pub use transaction::{Transaction, TransactionKind};
