//! Statement loader
//!
//! Reads the line-oriented statement format, one transaction per line:
//!
//! ```text
//! 25 Jul 2018,CHQ 000123,rent;charge,-650.00
//! ```
//!
//! Fields are date (`dd MMM yyyy` by default), a free-form reference used as
//! the transaction id, `;`-separated case-insensitive tag names, and an amount
//! whose decimal point is dropped to give minor units.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{CadenceError, CadenceResult};
use crate::models::{Money, TagSet, Transaction};

/// Default date format of the first statement field
pub const DEFAULT_STATEMENT_DATE_FORMAT: &str = "%d %b %Y";

const FIELD_COUNT: usize = 4;

/// Loads transactions from statement files
#[derive(Debug, Clone)]
pub struct StatementLoader {
    date_format: String,
}

impl Default for StatementLoader {
    fn default() -> Self {
        Self::new(DEFAULT_STATEMENT_DATE_FORMAT)
    }
}

impl StatementLoader {
    /// Create a loader expecting dates in the given strftime format
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Create a loader using the statement date format from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.statement_date_format.clone())
    }

    /// Load every transaction in a statement file
    pub fn load_path(&self, path: &Path) -> CadenceResult<Vec<Transaction>> {
        debug!(path = %path.display(), "Loading statement");

        let file = File::open(path).map_err(|e| {
            CadenceError::Io(format!("Failed to open statement {}: {}", path.display(), e))
        })?;

        let transactions = self.load_reader(file)?;
        info!(
            path = %path.display(),
            transactions = transactions.len(),
            "Loaded statement"
        );
        Ok(transactions)
    }

    /// Load every transaction from a reader
    ///
    /// Lines that are empty or whitespace-only are skipped. The first
    /// malformed line aborts the load with an import error naming its 1-based
    /// line number.
    pub fn load_reader<R: Read>(&self, reader: R) -> CadenceResult<Vec<Transaction>> {
        let mut transactions = Vec::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let transaction = self
                .parse_line(&line)
                .map_err(|reason| CadenceError::import(idx + 1, reason))?;
            transactions.push(transaction);
        }

        Ok(transactions)
    }

    /// Parse a single statement line
    ///
    /// Fields are split with CSV quoting rules, so a quoted id may contain a
    /// comma and its quotes are not part of the id.
    pub fn parse_line(&self, line: &str) -> Result<Transaction, String> {
        let record = split_fields(line)?;
        self.parse_record(&record)
    }

    fn parse_record(&self, record: &StringRecord) -> Result<Transaction, String> {
        if record.len() != FIELD_COUNT {
            return Err(format!(
                "Expected {} fields (date, id, tags, amount), found {}",
                FIELD_COUNT,
                record.len()
            ));
        }

        let field = |idx: usize| field_at(record, idx);

        let date = NaiveDate::parse_from_str(field(0), &self.date_format)
            .map_err(|_| format!("Could not parse date: '{}'", field(0)))?;

        let id = field(1);
        if id.is_empty() {
            return Err("Missing transaction id".to_string());
        }

        let tags: TagSet = field(2).parse().map_err(|e| format!("{}", e))?;

        let amount = Money::parse_statement(field(3)).map_err(|e| format!("{}", e))?;

        Ok(Transaction::new(id, date, amount, tags))
    }
}

fn split_fields(line: &str) -> Result<StringRecord, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|e| format!("Could not split statement line: {}", e))?;
    Ok(record)
}

fn field_at(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}
