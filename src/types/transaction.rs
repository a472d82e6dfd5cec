//! Transaction-related types for the Transaction Reporter
//!
//! This module defines the transaction record read from input files and the
//! transaction-kind classification used by the aggregation engine.

use crate::types::ReportError;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

/// Kind of a transaction, derived from its type label
///
/// Only `deposit` and `withdrawal` affect account balances. Every other
/// label is accepted and carried as [`TransactionKind::Other`] so that
/// per-type statistics still accumulate for it.
///
/// Matching is exact: `"Deposit"` or `"DEPOSIT"` are treated as unrecognized
/// labels, mirroring the input format this tool consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TransactionKind {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    Withdrawal,

    /// Any other type label, preserved verbatim
    ///
    /// Does not change any balance but still gets its own statistics entry.
    Other(String),
}

impl TransactionKind {
    /// The type label as it appeared in the input
    pub fn label(&self) -> &str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Other(label) => label,
        }
    }
}

impl From<String> for TransactionKind {
    fn from(label: String) -> Self {
        match label.as_str() {
            "deposit" => TransactionKind::Deposit,
            "withdrawal" => TransactionKind::Withdrawal,
            _ => TransactionKind::Other(label),
        }
    }
}

/// Input transaction record
///
/// Represents a single transaction as read from a CSV or JSON input file.
/// Field names map to the wire format's column headers / object keys.
///
/// The amount is kept as the raw string it arrived as; the engine coerces it
/// to a [`Decimal`] at each use via [`Transaction::amount_value`], so a
/// malformed amount surfaces from the update operation that touches it
/// rather than at parse time. The engine reads only `account`, `kind`,
/// `amount` and `currency`; the remaining fields are opaque payload that is
/// echoed into the suspicious-transaction output.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier
    #[serde(rename = "Transaction ID")]
    pub id: String,

    /// Account number the transaction applies to (grouping key)
    #[serde(rename = "Account number")]
    pub account: String,

    /// Transaction date, uninterpreted
    #[serde(rename = "Date")]
    pub date: String,

    /// Transaction kind parsed from the type label
    #[serde(rename = "Transaction type")]
    pub kind: TransactionKind,

    /// Raw amount as it appeared in the input
    #[serde(rename = "Amount")]
    pub amount: String,

    /// Currency code
    #[serde(rename = "Currency")]
    pub currency: String,

    /// Free-form description, uninterpreted
    #[serde(rename = "Description")]
    pub description: String,
}

impl Transaction {
    /// Coerce the raw amount to a [`Decimal`]
    ///
    /// # Returns
    ///
    /// * `Ok(Decimal)` - The parsed amount
    /// * `Err(ReportError::InvalidAmount)` - The amount is not a number
    pub fn amount_value(&self) -> Result<Decimal, ReportError> {
        Decimal::from_str(self.amount.trim())
            .map_err(|_| ReportError::invalid_amount(&self.amount, &self.id))
    }
}
