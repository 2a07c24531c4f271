// SPDX-License-Identifier: Apache-2.0

//! Summary CSV output.
//!
//! One row per scanned issue, no header, columns: issue number, state,
//! hyphen-joined labels, candidate-address count, matched-wallet count.
//! Label strings are free text, so fields are quoted when they contain a
//! comma, quote, or line break.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Default output location, created in the working directory.
pub const SUMMARY_FILE: &str = "summary.csv";

/// One row of the per-issue summary.
#[derive(Debug)]
pub struct SummaryRow {
    /// Issue number.
    pub issue_number: u64,
    /// Issue state.
    pub state: String,
    /// Hyphen-joined label string.
    pub labels: String,
    /// Candidate addresses found in the issue body.
    pub reported_count: usize,
    /// Candidates that matched the wallet set.
    pub matched_count: usize,
}

/// Buffered CSV writer over the summary file.
#[derive(Debug)]
pub struct SummaryWriter {
    out: BufWriter<File>,
    path: PathBuf,
}

impl SummaryWriter {
    /// Creates (truncating) the summary file.
    ///
    /// # Errors
    ///
    /// `ScanError::Summary` when the file cannot be created.
    pub fn create(path: &Path) -> Result<Self, ScanError> {
        let file = File::create(path).map_err(|source| ScanError::Summary {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }

    /// Appends one row.
    ///
    /// # Errors
    ///
    /// `ScanError::Summary` on any write failure.
    pub fn write_row(&mut self, row: &SummaryRow) -> Result<(), ScanError> {
        let line = format!(
            "{},{},{},{},{}\n",
            row.issue_number,
            csv_field(&row.state),
            csv_field(&row.labels),
            row.reported_count,
            row.matched_count
        );
        self.out
            .write_all(line.as_bytes())
            .map_err(|source| ScanError::Summary {
                path: self.path.clone(),
                source,
            })
    }

    /// Flushes buffered rows to disk.
    ///
    /// # Errors
    ///
    /// `ScanError::Summary` on flush failure.
    pub fn flush(&mut self) -> Result<(), ScanError> {
        self.out.flush().map_err(|source| ScanError::Summary {
            path: self.path.clone(),
            source,
        })
    }
}

/// Quotes a field when it contains a comma, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
