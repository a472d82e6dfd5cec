//! The aggregation engine
//!
//! [`TransactionProcessor`] consumes a sequence of transaction records and
//! incrementally builds three derived views:
//!
//! - account summaries (running balance, deposit and withdrawal totals)
//! - the suspicious-transaction list (large amount or uncommon currency)
//! - per-type statistics (total amount and count)
//!
//! The engine exclusively owns all three views for its lifetime and never
//! mutates the records it was given. Processing is single-threaded and
//! synchronous; callers needing concurrency serialize access externally
//! (one engine per batch, or an external mutex).
//!
//! A malformed amount aborts the current batch at the failing record with
//! no rollback of earlier records' effects. Running [`process_batch`]
//! twice on the same instance double-counts every record by design; see
//! the method docs.
//!
//! [`process_batch`]: TransactionProcessor::process_batch

use crate::core::config::ProcessorConfig;
use crate::core::observer::{NullObserver, ProcessingObserver};
use crate::types::{AccountSummary, ReportError, Transaction, TransactionKind, TypeStatistics};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Read-only composite view over the three derived structures
///
/// Returned by [`TransactionProcessor::process_batch`]. Borrows the
/// engine's state, so the engine cannot be mutated while a report is held.
#[derive(Debug, Clone, Copy)]
pub struct BatchReport<'a> {
    /// Account number → running summary, iterated in key order
    pub account_summaries: &'a BTreeMap<String, AccountSummary>,

    /// Flagged records in encounter order
    pub suspicious_transactions: &'a [Transaction],

    /// Type label → aggregate statistics, iterated in key order
    pub transaction_statistics: &'a BTreeMap<String, TypeStatistics>,
}

/// Aggregation engine over a batch of transaction records
///
/// Constructed with the full input sequence (which may be empty) and a
/// [`ProcessorConfig`] fixed for its lifetime. The three derived views
/// start empty and grow lazily as records reference new accounts and type
/// labels.
///
/// Both keyed views use [`BTreeMap`], so iteration (and therefore writer
/// output and filter order) is deterministic, sorted by key.
pub struct TransactionProcessor {
    transactions: Vec<Transaction>,
    config: ProcessorConfig,
    observer: Box<dyn ProcessingObserver>,
    account_summaries: BTreeMap<String, AccountSummary>,
    suspicious_transactions: Vec<Transaction>,
    transaction_statistics: BTreeMap<String, TypeStatistics>,
}

impl TransactionProcessor {
    /// Create a processor over the given input sequence
    ///
    /// Uses the default configuration and no observer. All derived views
    /// start empty.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        TransactionProcessor {
            transactions,
            config: ProcessorConfig::default(),
            observer: Box::new(NullObserver),
            account_summaries: BTreeMap::new(),
            suspicious_transactions: Vec::new(),
            transaction_statistics: BTreeMap::new(),
        }
    }

    /// Replace the classification configuration
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// Attach an observer notified after each state change
    pub fn with_observer(mut self, observer: Box<dyn ProcessingObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// The input sequence this processor was constructed with
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Account number → summary view, iterated in key order
    pub fn account_summaries(&self) -> &BTreeMap<String, AccountSummary> {
        &self.account_summaries
    }

    /// Flagged records in encounter order
    pub fn suspicious_transactions(&self) -> &[Transaction] {
        &self.suspicious_transactions
    }

    /// Type label → statistics view, iterated in key order
    pub fn transaction_statistics(&self) -> &BTreeMap<String, TypeStatistics> {
        &self.transaction_statistics
    }

    /// Fold one record into its account's summary
    ///
    /// Lazily creates a zeroed summary for the account. A deposit adds the
    /// amount to both balance and total_deposits; a withdrawal subtracts
    /// from balance and adds to total_withdrawals; any other kind leaves
    /// the numeric fields untouched but still creates the entry.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidAmount`] if the amount cannot be
    /// coerced to a number; no state is modified in that case.
    pub fn update_account_summary(&mut self, transaction: &Transaction) -> Result<(), ReportError> {
        let amount = transaction.amount_value()?;

        let summary = self
            .account_summaries
            .entry(transaction.account.clone())
            .or_insert_with(|| AccountSummary::new(&transaction.account));

        match transaction.kind {
            TransactionKind::Deposit => {
                summary.balance += amount;
                summary.total_deposits += amount;
            }
            TransactionKind::Withdrawal => {
                summary.balance -= amount;
                summary.total_withdrawals += amount;
            }
            TransactionKind::Other(_) => {}
        }

        self.observer.on_summary_updated(&transaction.account);
        Ok(())
    }

    /// Flag the record if it satisfies the suspicion predicate
    ///
    /// Suspicious iff `amount > threshold` (strict) or the currency is in
    /// the uncommon set. On a match the full record is appended to the
    /// suspicious list, preserving encounter order; there is no
    /// deduplication.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidAmount`] if the amount cannot be
    /// coerced, even when the currency alone would have matched.
    pub fn check_suspicious(&mut self, transaction: &Transaction) -> Result<(), ReportError> {
        let amount = transaction.amount_value()?;

        if amount > self.config.large_transaction_threshold
            || self.config.is_uncommon_currency(&transaction.currency)
        {
            self.suspicious_transactions.push(transaction.clone());
            self.observer.on_suspicious(transaction);
        }

        Ok(())
    }

    /// Fold one record into its type's statistics
    ///
    /// Lazily creates a zeroed entry keyed by the type label, then adds the
    /// amount and increments the count by exactly one. Unrecognized type
    /// labels get their own entries.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::InvalidAmount`] if the amount cannot be
    /// coerced to a number.
    pub fn update_transaction_statistics(
        &mut self,
        transaction: &Transaction,
    ) -> Result<(), ReportError> {
        let amount = transaction.amount_value()?;
        let label = transaction.kind.label();

        self.transaction_statistics
            .entry(label.to_string())
            .or_default()
            .record(amount);

        self.observer.on_statistics_updated(label);
        Ok(())
    }

    /// Run the three update operations over every record, in input order
    ///
    /// For each record the updates run in a fixed order: account summary,
    /// suspicion check, type statistics. The order only affects observer
    /// event interleaving; the final view contents are independent of it.
    ///
    /// Deliberately not idempotent: a second call on the same instance
    /// replays the input and double-counts every total, count and
    /// suspicious entry. Callers wanting fresh results construct a fresh
    /// processor.
    ///
    /// # Errors
    ///
    /// The first malformed record aborts the batch at that record; effects
    /// of the records before it remain applied.
    pub fn process_batch(&mut self) -> Result<BatchReport<'_>, ReportError> {
        // Records are cloned out one at a time so the update methods can
        // borrow the processor mutably while the input stays intact.
        for index in 0..self.transactions.len() {
            let transaction = self.transactions[index].clone();
            self.update_account_summary(&transaction)?;
            self.check_suspicious(&transaction)?;
            self.update_transaction_statistics(&transaction)?;
        }

        self.observer.on_batch_complete();

        Ok(BatchReport {
            account_summaries: &self.account_summaries,
            suspicious_transactions: &self.suspicious_transactions,
            transaction_statistics: &self.transaction_statistics,
        })
    }

    /// Statistics entry for a transaction type
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::StatisticsNotFound`] if the type was never
    /// observed. Unlike the update paths, read-only queries do not lazily
    /// create entries.
    pub fn statistics_for(&self, kind: &str) -> Result<&TypeStatistics, ReportError> {
        self.transaction_statistics
            .get(kind)
            .ok_or_else(|| ReportError::statistics_not_found(kind))
    }

    /// Average transaction amount for a type
    ///
    /// Zero when an entry exists with a zero count.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::StatisticsNotFound`] if the type was never
    /// observed.
    pub fn average_amount(&self, kind: &str) -> Result<Decimal, ReportError> {
        Ok(self.statistics_for(kind)?.average())
    }
}
