//! Transaction Reporter Library
//! # Overview
//!
//! This library ingests a batch of financial transaction records from a CSV
//! or JSON file and produces three derived views: per-account running
//! balances, a flagged subset of suspicious transactions, and per-type
//! aggregate statistics.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, AccountSummary, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - The aggregation engine:
//!   - [`core::processor`] - Per-record updates, batch driving and queries
//!   - [`core::config`] - Classification constants
//!   - [`core::observer`] - Injected observability seam
//! - [`io`] - Input loading and output serialization
//!
//! # Derived Views
//!
//! - **Account summaries**: running balance plus deposit and withdrawal
//!   totals per account, with `balance == total_deposits -
//!   total_withdrawals` at all times
//! - **Suspicious transactions**: records whose amount strictly exceeds
//!   the large-transaction threshold or whose currency is in the
//!   uncommon-currency set, in encounter order
//! - **Transaction-type statistics**: total amount and count per type
//!   label, with a derived average query

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    BatchReport, LogObserver, NullObserver, ProcessingObserver, ProcessorConfig,
    TransactionProcessor,
};
pub use io::{InputLoader, OutputWriter};
pub use types::{
    AccountSummary, FilterMode, ReportError, SummaryField, Transaction, TransactionKind,
    TypeStatistics,
};
