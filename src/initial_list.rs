// SPDX-License-Identifier: Apache-2.0

//! Check against the initial flagged-address list.
//!
//! Console-only phase: each match is printed as discovered, followed by the
//! full matched list and a final count. Matches are reported in their
//! original, non-normalized form.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::ScanError;
use crate::wallets::{WalletSet, normalize_address};

/// Scans the initial flagged list and reports which wallets appear in it.
///
/// Returns the matched raw address strings in file order.
///
/// # Errors
///
/// `ScanError::InputFile` when the list cannot be read.
pub fn check_initial_list(path: &Path, wallets: &WalletSet) -> Result<Vec<String>, ScanError> {
    println!("checking if your wallets are flagged in the initial list");

    let contents = fs::read_to_string(path).map_err(|source| ScanError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut flagged = Vec::new();
    for row in contents.lines() {
        if row.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = row.split(',').collect();
        if columns.len() != 1 {
            warn!(%row, "multiple entries found in a row, using the first column");
        }
        let raw = columns[0];
        if wallets.contains(&normalize_address(raw)) {
            println!("found wallet: {raw}");
            flagged.push(raw.to_string());
        }
    }

    if !flagged.is_empty() {
        println!("printing flagged wallets list");
        for address in &flagged {
            println!("{address}");
        }
    }
    println!("check finished. total wallets flagged: {}", flagged.len());

    Ok(flagged)
}
