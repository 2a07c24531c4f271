// SPDX-License-Identifier: Apache-2.0

//! Wallet set construction from the user's CSV.
//!
//! The wallet set is built once at startup and then only read. Rows that
//! look malformed (extra columns, unexpected address length) are warned
//! about but still processed with the first column, so the set always
//! reflects every row of the input file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::ScanError;

/// Canonical address length: "0x" prefix plus 40 hex characters.
pub const ADDRESS_LEN: usize = 42;

/// Normalizes an address: trim surrounding whitespace, then lowercase.
///
/// Idempotent: applying it twice gives the same result.
pub fn normalize_address(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The normalized set of the user's wallet addresses.
#[derive(Debug, Default)]
pub struct WalletSet {
    addresses: HashSet<String>,
}

impl WalletSet {
    /// Builds a set from raw address strings, normalizing each one.
    #[cfg(test)]
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            addresses: addresses
                .into_iter()
                .map(|a| normalize_address(a.as_ref()))
                .collect(),
        }
    }

    /// Membership test against an already-normalized address.
    pub fn contains(&self, normalized: &str) -> bool {
        self.addresses.contains(normalized)
    }

    /// Number of distinct normalized addresses.
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// True when no address was loaded.
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Loads the wallet CSV into a [`WalletSet`].
///
/// One address per row in column 0; blank rows are skipped. Rows with more
/// than one column and addresses whose normalized length is not 42 are
/// warned about but still inserted. Duplicates collapse silently.
///
/// Prints the count of loaded addresses on success.
///
/// # Errors
///
/// `ScanError::InputFile` when the file cannot be read,
/// `ScanError::EmptyWalletSet` when no address was loaded.
pub fn load_wallet_set(path: &Path) -> Result<WalletSet, ScanError> {
    let contents = fs::read_to_string(path).map_err(|source| ScanError::InputFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut addresses = HashSet::new();
    for row in contents.lines() {
        if row.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = row.split(',').collect();
        if columns.len() != 1 {
            warn!(%row, "multiple entries found in a row, using the first column");
        }
        let address = normalize_address(columns[0]);
        if address.len() != ADDRESS_LEN {
            warn!(
                address = %columns[0].trim(),
                length = address.len(),
                "address length is not 42 characters"
            );
        }
        addresses.insert(address);
    }

    let wallets = WalletSet { addresses };
    if wallets.is_empty() {
        return Err(ScanError::EmptyWalletSet {
            path: path.to_path_buf(),
        });
    }

    println!("{} valid addresses found", wallets.len());
    Ok(wallets)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn wallet_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write fixture");
        file
    }

    fn addr(c: char) -> String {
        format!("0x{}", c.to_string().repeat(40))
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = "  0xAbCdEf1234567890abcdef1234567890ABCDEF12 ";
        let once = normalize_address(raw);
        assert_eq!(normalize_address(&once), once);
        assert_eq!(once, "0xabcdef1234567890abcdef1234567890abcdef12");
    }

    #[test]
    fn duplicates_collapse_to_distinct_normalized_addresses() {
        let a = addr('a');
        let file = wallet_file(&format!("{a}\n{}\n {a} \n{}\n", a.to_uppercase(), addr('b')));
        let set = load_wallet_set(file.path()).expect("should load");
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
        assert!(set.contains(&addr('b')));
    }

    #[test]
    fn empty_file_is_fatal() {
        let file = wallet_file("");
        let err = load_wallet_set(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::EmptyWalletSet { .. }));
    }

    #[test]
    fn blank_rows_only_is_fatal() {
        let file = wallet_file("\n   \n\n");
        let err = load_wallet_set(file.path()).unwrap_err();
        assert!(matches!(err, ScanError::EmptyWalletSet { .. }));
    }

    #[test]
    fn unreadable_file_is_fatal() {
        let err = load_wallet_set(Path::new("/nonexistent/wallets.csv")).unwrap_err();
        assert!(matches!(err, ScanError::InputFile { .. }));
    }

    #[test]
    fn extra_columns_still_use_first_column() {
        let a = addr('a');
        let file = wallet_file(&format!("{a},note,another\n"));
        let set = load_wallet_set(file.path()).expect("should load");
        assert_eq!(set.len(), 1);
        assert!(set.contains(&a));
    }

    #[test]
    fn wrong_length_addresses_are_kept() {
        // Warned about but not excluded; see the run documentation.
        let file = wallet_file("0xshort\n");
        let set = load_wallet_set(file.path()).expect("should load");
        assert!(set.contains("0xshort"));
    }

    #[test]
    fn from_addresses_normalizes() {
        let set = WalletSet::from_addresses([" 0xAAA ", "0xaaa"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("0xaaa"));
    }
}
