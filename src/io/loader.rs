//! Input loading
//!
//! Turns a file path into an in-memory sequence of transaction records.
//! The format is detected from the file extension: `csv` and `json` are
//! recognized; any other extension yields an empty sequence. The loader is
//! a format-conversion collaborator only; classification and aggregation
//! live in [`crate::core`].

use crate::types::{ReportError, Transaction};
use csv::{ReaderBuilder, Trim};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Loads transaction records from a CSV or JSON file
///
/// # Examples
///
/// ```no_run
/// use transaction_reporter::io::InputLoader;
///
/// let transactions = InputLoader::new("input/transactions.csv")
///     .load()
///     .expect("failed to load input");
/// println!("loaded {} records", transactions.len());
/// ```
#[derive(Debug, Clone)]
pub struct InputLoader {
    path: PathBuf,
}

impl InputLoader {
    /// Create a loader for the given input path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        InputLoader { path: path.into() }
    }

    /// The input path this loader reads from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File format detected from the path's extension
    pub fn file_format(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// Read all transaction records from the input file
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Transaction>)` - The parsed records, in file order; empty
    ///   when the extension is neither `csv` nor `json`
    /// * `Err(ReportError::FileNotFound)` - The path does not exist
    /// * `Err(ReportError::Parse)` - The file content is malformed
    pub fn load(&self) -> Result<Vec<Transaction>, ReportError> {
        match self.file_format() {
            Some("csv") => self.read_csv(),
            Some("json") => self.read_json(),
            _ => Ok(Vec::new()),
        }
    }

    fn open(&self) -> Result<File, ReportError> {
        File::open(&self.path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                ReportError::file_not_found(&self.path)
            } else {
                ReportError::from(error)
            }
        })
    }

    fn read_csv(&self) -> Result<Vec<Transaction>, ReportError> {
        let file = self.open()?;

        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);

        let mut transactions = Vec::new();
        for result in reader.deserialize::<Transaction>() {
            transactions.push(result?);
        }

        Ok(transactions)
    }

    fn read_json(&self) -> Result<Vec<Transaction>, ReportError> {
        let file = self.open()?;
        let mut value: Value = serde_json::from_reader(BufReader::new(file))?;

        // JSON inputs may carry amounts as numbers; the record type keeps
        // the amount as the raw string it arrived as, so normalize before
        // the typed deserialization.
        if let Value::Array(items) = &mut value {
            for item in items {
                if let Some(amount) = item.get_mut("Amount") {
                    if amount.is_number() {
                        *amount = Value::String(amount.to_string());
                    }
                }
            }
        }

        Ok(serde_json::from_value(value)?)
    }
}
