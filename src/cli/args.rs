use crate::core::ProcessorConfig;
use crate::types::{FilterMode, SummaryField};
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::str::FromStr;

/// Summarize financial transactions and flag suspicious activity
#[derive(Parser, Debug)]
#[command(name = "transaction-reporter")]
#[command(
    about = "Summarize financial transactions and flag suspicious activity",
    long_about = None
)]
pub struct CliArgs {
    /// Input file path containing transaction records
    #[arg(value_name = "INPUT", help = "Path to the input CSV or JSON file")]
    pub input_file: PathBuf,

    /// Directory the report files are written to
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "output",
        help = "Directory for the generated report files (created if absent)"
    )]
    pub output_dir: PathBuf,

    /// Summary field the post-processing filter compares
    #[arg(
        long = "filter-field",
        value_name = "FIELD",
        default_value = "balance",
        value_parser = SummaryField::from_str,
        help = "Summary field to filter on: 'balance', 'total-deposits' or 'total-withdrawals'"
    )]
    pub filter_field: SummaryField,

    /// Threshold the filter compares the field against
    #[arg(
        long = "filter-threshold",
        value_name = "AMOUNT",
        default_value = "5000",
        value_parser = parse_decimal,
        help = "Threshold value for the summary filter"
    )]
    pub filter_threshold: Decimal,

    /// Filter comparison mode
    #[arg(
        long = "filter-mode",
        value_name = "MODE",
        default_value = "at-least",
        value_parser = FilterMode::from_str,
        help = "'at-least' keeps summaries >= threshold, 'at-most' keeps summaries <= threshold"
    )]
    pub filter_mode: FilterMode,

    /// Override the large-transaction threshold
    #[arg(
        long = "large-threshold",
        value_name = "AMOUNT",
        value_parser = parse_decimal,
        help = "Amount above which (strictly) a transaction is flagged (default: 10000)"
    )]
    pub large_threshold: Option<Decimal>,

    /// Additional uncommon currency codes
    #[arg(
        long = "flag-currency",
        value_name = "CODE",
        help = "Extra currency code to treat as uncommon (repeatable)"
    )]
    pub flag_currencies: Vec<String>,
}

fn parse_decimal(value: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str(value)
}

impl CliArgs {
    /// Build the engine configuration from the CLI overrides
    ///
    /// Starts from [`ProcessorConfig::default`] and applies the
    /// `--large-threshold` override and any `--flag-currency` additions on
    /// top of the built-in uncommon-currency set.
    pub fn to_processor_config(&self) -> ProcessorConfig {
        let mut config = ProcessorConfig::default();

        if let Some(threshold) = self.large_threshold {
            config.large_transaction_threshold = threshold;
        }
        config
            .uncommon_currencies
            .extend(self.flag_currencies.iter().cloned());

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let parsed = CliArgs::try_parse_from(["program", "input.csv"]).unwrap();

        assert_eq!(parsed.input_file, PathBuf::from("input.csv"));
        assert_eq!(parsed.output_dir, PathBuf::from("output"));
        assert_eq!(parsed.filter_field, SummaryField::Balance);
        assert_eq!(parsed.filter_threshold, Decimal::from(5000));
        assert_eq!(parsed.filter_mode, FilterMode::AtLeast);
        assert_eq!(parsed.large_threshold, None);
        assert!(parsed.flag_currencies.is_empty());
    }

    #[rstest]
    #[case::balance(&["program", "--filter-field", "balance", "in.csv"], SummaryField::Balance)]
    #[case::deposits(
        &["program", "--filter-field", "total-deposits", "in.csv"],
        SummaryField::TotalDeposits
    )]
    #[case::withdrawals(
        &["program", "--filter-field", "total-withdrawals", "in.csv"],
        SummaryField::TotalWithdrawals
    )]
    fn test_filter_field_parsing(#[case] args: &[&str], #[case] expected: SummaryField) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.filter_field, expected);
    }

    #[rstest]
    #[case::at_least(&["program", "--filter-mode", "at-least", "in.csv"], FilterMode::AtLeast)]
    #[case::at_most(&["program", "--filter-mode", "at-most", "in.csv"], FilterMode::AtMost)]
    fn test_filter_mode_parsing(#[case] args: &[&str], #[case] expected: FilterMode) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.filter_mode, expected);
    }

    #[test]
    fn test_processor_config_defaults() {
        let parsed = CliArgs::try_parse_from(["program", "input.csv"]).unwrap();
        let config = parsed.to_processor_config();

        assert_eq!(config, ProcessorConfig::default());
    }

    #[test]
    fn test_processor_config_overrides() {
        let parsed = CliArgs::try_parse_from([
            "program",
            "--large-threshold",
            "2500",
            "--flag-currency",
            "DOGE",
            "--flag-currency",
            "SHIB",
            "input.csv",
        ])
        .unwrap();
        let config = parsed.to_processor_config();

        assert_eq!(config.large_transaction_threshold, Decimal::from(2500));
        // Built-in currencies stay; flagged ones are added on top
        assert!(config.is_uncommon_currency("XRP"));
        assert!(config.is_uncommon_currency("DOGE"));
        assert!(config.is_uncommon_currency("SHIB"));
    }

    #[rstest]
    #[case::missing_input(&["program"])]
    #[case::bad_filter_field(&["program", "--filter-field", "bogus", "in.csv"])]
    #[case::bad_filter_mode(&["program", "--filter-mode", "between", "in.csv"])]
    #[case::bad_threshold(&["program", "--filter-threshold", "abc", "in.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
