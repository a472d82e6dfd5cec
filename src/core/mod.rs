//! Core aggregation logic
//!
//! This module contains the aggregation engine and its collaborators:
//! - `processor` - The engine driving per-record updates and batch runs
//! - `config` - Classification constants (threshold, uncommon currencies)
//! - `observer` - Injected observability seam

pub mod config;
pub mod observer;
pub mod processor;

pub use config::ProcessorConfig;
pub use observer::{LogObserver, NullObserver, ProcessingObserver};
pub use processor::{BatchReport, TransactionProcessor};
