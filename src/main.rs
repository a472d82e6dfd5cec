//! Transaction Reporter CLI
//!
//! Command-line interface for summarizing financial transactions from CSV
//! or JSON files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.csv
//! cargo run -- --output-dir reports transactions.json
//! cargo run -- --filter-field balance --filter-threshold 5000 --filter-mode at-least transactions.csv
//! ```
//!
//! The program loads transaction records from the input file, runs them
//! through the aggregation engine once, and writes four CSV files to the
//! output directory: account summaries, suspicious transactions,
//! transaction-type statistics, and the filtered account summaries. The
//! filtered file's path is printed to stdout.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=info` (or `warn` for
//! flagged transactions only) to see per-record processing events.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed input, write failure, etc.)

use std::fs::{self, File};
use std::process;
use transaction_reporter::cli::{self, CliArgs};
use transaction_reporter::core::{LogObserver, TransactionProcessor};
use transaction_reporter::io::{InputLoader, OutputWriter};
use transaction_reporter::types::ReportError;

fn main() {
    env_logger::init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), ReportError> {
    let transactions = InputLoader::new(&args.input_file).load()?;

    let mut processor = TransactionProcessor::new(transactions)
        .with_config(args.to_processor_config())
        .with_observer(Box::new(LogObserver));
    let report = processor.process_batch()?;

    fs::create_dir_all(&args.output_dir)?;

    let writer = OutputWriter::new(
        report.account_summaries,
        report.suspicious_transactions,
        report.transaction_statistics,
    );

    let mut summaries_file = File::create(args.output_dir.join("account_summaries.csv"))?;
    writer.write_account_summaries(&mut summaries_file)?;

    let mut suspicious_file = File::create(args.output_dir.join("suspicious_transactions.csv"))?;
    writer.write_suspicious_transactions(&mut suspicious_file)?;

    let mut statistics_file = File::create(args.output_dir.join("transaction_statistics.csv"))?;
    writer.write_transaction_statistics(&mut statistics_file)?;

    let filtered = writer.filter_account_summaries(
        args.filter_field,
        args.filter_threshold,
        args.filter_mode,
    );
    let filtered_path = args.output_dir.join("filtered_summaries.csv");
    let mut filtered_file = File::create(&filtered_path)?;
    OutputWriter::write_filtered_summaries(&filtered, &mut filtered_file)?;

    println!("{}", filtered_path.display());

    Ok(())
}
