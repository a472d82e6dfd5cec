//! Observability seam for the aggregation engine
//!
//! Logging is a cross-cutting concern injected into the engine through the
//! [`ProcessingObserver`] trait rather than a global logger inside the
//! update operations. The engine defaults to [`NullObserver`], so the pure
//! aggregation paths run with no observability attached; the CLI installs
//! [`LogObserver`], which forwards to the `log` facade.

use crate::types::Transaction;

/// Callbacks the engine invokes after each state change
///
/// All methods have no-op defaults; implementors override only the events
/// they care about. Callbacks fire after the corresponding state change has
/// been applied.
pub trait ProcessingObserver {
    /// An account summary was updated (or lazily created)
    fn on_summary_updated(&self, _account: &str) {}

    /// A transaction was flagged and appended to the suspicious list
    fn on_suspicious(&self, _transaction: &Transaction) {}

    /// Statistics for a transaction type were updated
    fn on_statistics_updated(&self, _kind: &str) {}

    /// A full batch run finished
    fn on_batch_complete(&self) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl ProcessingObserver for NullObserver {}

/// Observer that emits structured log records
///
/// Flagged transactions are warnings; everything else is informational.
/// Output destination and verbosity are whatever the binary's `log`
/// backend was configured with.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProcessingObserver for LogObserver {
    fn on_summary_updated(&self, account: &str) {
        log::info!("Account summary updated: {account}");
    }

    fn on_suspicious(&self, transaction: &Transaction) {
        log::warn!(
            "Suspicious transaction: id={} account={} amount={} currency={}",
            transaction.id,
            transaction.account,
            transaction.amount,
            transaction.currency
        );
    }

    fn on_statistics_updated(&self, kind: &str) {
        log::info!("Updated transaction statistics for: {kind}");
    }

    fn on_batch_complete(&self) {
        log::info!("Data processing complete");
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! Test support: an observer that records the events it sees.

    use super::ProcessingObserver;
    use crate::types::Transaction;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shared event log handed to the engine under test
    #[derive(Debug, Clone, Default)]
    pub struct RecordingObserver {
        pub events: Rc<RefCell<Vec<String>>>,
    }

    impl ProcessingObserver for RecordingObserver {
        fn on_summary_updated(&self, account: &str) {
            self.events.borrow_mut().push(format!("summary:{account}"));
        }

        fn on_suspicious(&self, transaction: &Transaction) {
            self.events
                .borrow_mut()
                .push(format!("suspicious:{}", transaction.id));
        }

        fn on_statistics_updated(&self, kind: &str) {
            self.events.borrow_mut().push(format!("statistics:{kind}"));
        }

        fn on_batch_complete(&self) {
            self.events.borrow_mut().push("batch-complete".to_string());
        }
    }
}
