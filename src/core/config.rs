//! Engine configuration
//!
//! Classification constants for the aggregation engine, fixed for the
//! lifetime of a [`TransactionProcessor`](crate::core::TransactionProcessor)
//! instance.

use rust_decimal::Decimal;

/// Configuration for the suspicion predicate
///
/// A transaction is flagged when its amount is strictly greater than
/// `large_transaction_threshold`, or when its currency is listed in
/// `uncommon_currencies` (inclusive OR). A transaction exactly at the
/// threshold is not flagged by amount.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorConfig {
    /// Strict lower bound above which a transaction is flagged regardless
    /// of currency
    pub large_transaction_threshold: Decimal,

    /// Currency codes treated as higher-risk
    pub uncommon_currencies: Vec<String>,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        ProcessorConfig {
            large_transaction_threshold: Decimal::from(10_000),
            uncommon_currencies: vec!["XRP".to_string(), "LTC".to_string()],
        }
    }
}

impl ProcessorConfig {
    /// Whether the given currency code is in the uncommon set
    pub fn is_uncommon_currency(&self, currency: &str) -> bool {
        self.uncommon_currencies.iter().any(|c| c == currency)
    }
}
