//! Output serialization and summary filtering
//!
//! [`OutputWriter`] borrows the engine's three derived views and writes
//! each to CSV with a fixed header row. It also hosts the post-processing
//! filter over the account-summary view, a pure function with no engine
//! involvement.
//!
//! All write methods take `&mut dyn Write`, so they serialize to files,
//! buffers or stdout alike.

use crate::types::{AccountSummary, FilterMode, ReportError, SummaryField, Transaction, TypeStatistics};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::io::Write;

/// Serializes the three derived views to delimited output
pub struct OutputWriter<'a> {
    account_summaries: &'a BTreeMap<String, AccountSummary>,
    suspicious_transactions: &'a [Transaction],
    transaction_statistics: &'a BTreeMap<String, TypeStatistics>,
}

impl<'a> OutputWriter<'a> {
    /// Create a writer over the three views
    pub fn new(
        account_summaries: &'a BTreeMap<String, AccountSummary>,
        suspicious_transactions: &'a [Transaction],
        transaction_statistics: &'a BTreeMap<String, TypeStatistics>,
    ) -> Self {
        OutputWriter {
            account_summaries,
            suspicious_transactions,
            transaction_statistics,
        }
    }

    /// Write the account-summary view as CSV
    ///
    /// Columns: `Account number, Balance, Total Deposits, Total
    /// Withdrawals`. Rows follow the view's key order.
    pub fn write_account_summaries(&self, output: &mut dyn Write) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(output);

        writer.write_record([
            "Account number",
            "Balance",
            "Total Deposits",
            "Total Withdrawals",
        ])?;

        for summary in self.account_summaries.values() {
            writer.write_record(&[
                summary.account_number.clone(),
                summary.balance.to_string(),
                summary.total_deposits.to_string(),
                summary.total_withdrawals.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the suspicious-transaction list as CSV
    ///
    /// Full records in encounter order; the amount is echoed verbatim as
    /// it arrived in the input.
    pub fn write_suspicious_transactions(&self, output: &mut dyn Write) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(output);

        writer.write_record([
            "Transaction ID",
            "Account number",
            "Date",
            "Transaction type",
            "Amount",
            "Currency",
            "Description",
        ])?;

        for transaction in self.suspicious_transactions {
            writer.write_record(&[
                transaction.id.clone(),
                transaction.account.clone(),
                transaction.date.clone(),
                transaction.kind.label().to_string(),
                transaction.amount.clone(),
                transaction.currency.clone(),
                transaction.description.clone(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the per-type statistics view as CSV
    ///
    /// Columns: `Transaction type, Total amount, Transaction count`. Rows
    /// follow the view's key order.
    pub fn write_transaction_statistics(&self, output: &mut dyn Write) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(output);

        writer.write_record(["Transaction type", "Total amount", "Transaction count"])?;

        for (kind, statistics) in self.transaction_statistics {
            writer.write_record(&[
                kind.clone(),
                statistics.total_amount.to_string(),
                statistics.transaction_count.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Select account summaries by comparing one field against a threshold
    ///
    /// Pure function over the summary view: includes each summary whose
    /// `field` is `>=` the threshold ([`FilterMode::AtLeast`]) or `<=` the
    /// threshold ([`FilterMode::AtMost`]), preserving the view's iteration
    /// order.
    pub fn filter_account_summaries(
        &self,
        field: SummaryField,
        threshold: Decimal,
        mode: FilterMode,
    ) -> Vec<&'a AccountSummary> {
        self.account_summaries
            .values()
            .filter(|summary| match mode {
                FilterMode::AtLeast => summary.field(field) >= threshold,
                FilterMode::AtMost => summary.field(field) <= threshold,
            })
            .collect()
    }

    /// Write a filtered summary list as CSV
    ///
    /// Uses the same header as [`write_account_summaries`].
    ///
    /// [`write_account_summaries`]: OutputWriter::write_account_summaries
    pub fn write_filtered_summaries(
        summaries: &[&AccountSummary],
        output: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let mut writer = csv::Writer::from_writer(output);

        writer.write_record([
            "Account number",
            "Balance",
            "Total Deposits",
            "Total Withdrawals",
        ])?;

        for summary in summaries {
            writer.write_record(&[
                summary.account_number.clone(),
                summary.balance.to_string(),
                summary.total_deposits.to_string(),
                summary.total_withdrawals.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}
