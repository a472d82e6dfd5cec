//! Derived view types: account summaries and per-type statistics
//!
//! These are the value records the aggregation engine accumulates into its
//! keyed views, plus the typed field accessor and comparison mode used by
//! the post-processing filter over account summaries.

use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Per-account running totals
///
/// Created lazily when an account number is first seen and never deleted
/// during a run. All counters start at zero.
///
/// Invariant: `balance == total_deposits - total_withdrawals` at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    /// The account number (echo of the view key)
    pub account_number: String,

    /// Signed running balance
    pub balance: Decimal,

    /// Running sum of deposit amounts
    pub total_deposits: Decimal,

    /// Running sum of withdrawal amounts
    pub total_withdrawals: Decimal,
}

impl AccountSummary {
    /// Create a zeroed summary for the given account number
    pub fn new(account_number: impl Into<String>) -> Self {
        AccountSummary {
            account_number: account_number.into(),
            balance: Decimal::ZERO,
            total_deposits: Decimal::ZERO,
            total_withdrawals: Decimal::ZERO,
        }
    }

    /// Read one numeric field by its typed accessor
    ///
    /// Used by the summary filter instead of string-keyed dynamic lookup.
    pub fn field(&self, field: SummaryField) -> Decimal {
        match field {
            SummaryField::Balance => self.balance,
            SummaryField::TotalDeposits => self.total_deposits,
            SummaryField::TotalWithdrawals => self.total_withdrawals,
        }
    }
}

/// Numeric fields of an [`AccountSummary`] the filter can compare on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryField {
    Balance,
    TotalDeposits,
    TotalWithdrawals,
}

impl SummaryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryField::Balance => "balance",
            SummaryField::TotalDeposits => "total-deposits",
            SummaryField::TotalWithdrawals => "total-withdrawals",
        }
    }
}

impl FromStr for SummaryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balance" => Ok(SummaryField::Balance),
            "total-deposits" => Ok(SummaryField::TotalDeposits),
            "total-withdrawals" => Ok(SummaryField::TotalWithdrawals),
            _ => Err(format!(
                "unknown summary field '{s}' (expected 'balance', 'total-deposits' or 'total-withdrawals')"
            )),
        }
    }
}

impl fmt::Display for SummaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison mode of the summary filter
///
/// `AtLeast` keeps summaries whose field is `>=` the threshold; `AtMost`
/// keeps those `<=` the threshold. A summary exactly at the threshold is
/// kept in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    AtLeast,
    AtMost,
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "at-least" => Ok(FilterMode::AtLeast),
            "at-most" => Ok(FilterMode::AtMost),
            _ => Err(format!(
                "unknown filter mode '{s}' (expected 'at-least' or 'at-most')"
            )),
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterMode::AtLeast => "at-least",
            FilterMode::AtMost => "at-most",
        })
    }
}

/// Aggregate statistics for one transaction type
///
/// Created lazily when a type label is first seen. `transaction_count`
/// increases by exactly one per record; `total_amount` accumulates signed
/// amounts, so it is not monotonic in absolute terms.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeStatistics {
    /// Running sum of amounts for this type
    pub total_amount: Decimal,

    /// Running count of records of this type
    pub transaction_count: u64,
}

impl TypeStatistics {
    /// Fold one transaction amount into the statistics
    pub fn record(&mut self, amount: Decimal) {
        self.total_amount += amount;
        self.transaction_count += 1;
    }

    /// Average amount per transaction, or zero when the count is zero
    pub fn average(&self) -> Decimal {
        if self.transaction_count == 0 {
            Decimal::ZERO
        } else {
            self.total_amount / Decimal::from(self.transaction_count)
        }
    }
}
