// SPDX-License-Identifier: Apache-2.0

//! Issue scanning: pagination, address extraction, and the summary report.
//!
//! Walks every issue of the report repository, extracts address-like lines
//! from issue bodies, cross-references them against the wallet set, and
//! writes one summary row per issue. The set of the user's own wallets found
//! anywhere in the tracker accumulates across all pages.

use std::collections::HashSet;

use crate::error::ScanError;
use crate::github::issues::IssueSource;
use crate::summary::{SummaryRow, SummaryWriter};
use crate::wallets::{ADDRESS_LEN, WalletSet, normalize_address};

/// Candidate address prefix. The check is case-sensitive: "0X" does not
/// qualify.
const ADDRESS_PREFIX: &str = "0x";

/// Totals accumulated over a full scan.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Issues that produced a summary row (bodyless issues are skipped).
    pub issues_scanned: usize,
    /// Pages requested from the API.
    pub pages_fetched: u32,
    /// Normalized addresses of the user's wallets found in any issue.
    pub reported: HashSet<String>,
}

/// Extracts candidate addresses from an issue body, in original case.
///
/// Bodies whose trimmed length is 42 bytes or less are never split, so they
/// yield no candidates even when the body itself is a bare address. Longer
/// bodies are split on the literal CRLF sequence the tracker's issue form
/// produces; a trimmed line qualifies when it is at least 42 bytes long and
/// starts with exactly "0x".
pub fn extract_candidates(body: &str) -> Vec<String> {
    if body.trim().len() <= ADDRESS_LEN {
        return Vec::new();
    }
    body.split("\r\n")
        .map(str::trim)
        .filter(|line| line.len() >= ADDRESS_LEN && line.starts_with(ADDRESS_PREFIX))
        .map(ToOwned::to_owned)
        .collect()
}

/// Joins issue labels into a single hyphen-separated string.
///
/// An empty label list yields an empty string.
pub fn concat_labels(labels: &[String]) -> String {
    labels.join("-")
}

/// Scans all issues of the report repository against the wallet set.
///
/// Pagination starts at page 0 with an assumed last page of 1 and re-reads
/// the server-reported last page after every response, so at least one
/// request is always made and the loop runs until the current index exceeds
/// the latest reported value.
///
/// # Errors
///
/// Any fetch or summary write failure aborts the scan; no partial-result
/// recovery is attempted.
pub async fn scan_issues<S: IssueSource>(
    source: &S,
    wallets: &WalletSet,
    summary: &mut SummaryWriter,
) -> Result<ScanOutcome, ScanError> {
    println!("checking if your wallet has been reported in any github issue");

    let mut outcome = ScanOutcome::default();
    let mut current_page: u32 = 0;
    let mut last_page: u32 = 1;

    while current_page <= last_page {
        let page = source.fetch_page(current_page).await?;
        outcome.pages_fetched += 1;

        for issue in &page.issues {
            let Some(body) = issue.body.as_deref() else {
                continue;
            };

            let candidates = extract_candidates(body);
            let mut matched = Vec::new();
            for candidate in &candidates {
                let address = normalize_address(candidate);
                if wallets.contains(&address) {
                    outcome.reported.insert(address.clone());
                    matched.push(address);
                }
            }

            let labels = concat_labels(&issue.labels);
            if !matched.is_empty() {
                let noun = if matched.len() > 1 { "wallets" } else { "wallet" };
                println!(
                    "{} {} reported in issue: {}, state: {}, label: {} -- {:?}",
                    matched.len(),
                    noun,
                    issue.number,
                    issue.state,
                    labels,
                    matched
                );
            }

            summary.write_row(&SummaryRow {
                issue_number: issue.number,
                state: issue.state.clone(),
                labels,
                reported_count: candidates.len(),
                matched_count: matched.len(),
            })?;
            outcome.issues_scanned += 1;
        }

        last_page = page.last_page;
        current_page += 1;
    }

    summary.flush()?;
    println!("total unique wallets reported: {}", outcome.reported.len());
    println!("analysis complete!");

    Ok(outcome)
}


#[cfg(test)]
mod scan_tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::github::issues::{IssuePage, ReportedIssue};

    struct MockSource {
        pages: Vec<IssuePage>,
        calls: AtomicU32,
    }

    impl MockSource {
        fn new(pages: Vec<IssuePage>) -> Self {
            Self {
                pages,
                calls: AtomicU32::new(0),
            }
        }
    }

    #[async_trait]
    impl IssueSource for MockSource {
        async fn fetch_page(&self, page: u32) -> Result<IssuePage, ScanError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.pages[page as usize].clone())
        }
    }

    fn addr(c: char) -> String {
        format!("0x{}", c.to_string().repeat(40))
    }

    fn issue(number: u64, body: Option<String>, labels: &[&str]) -> ReportedIssue {
        ReportedIssue {
            number,
            state: "open".to_string(),
            body,
            labels: labels.iter().map(|l| (*l).to_string()).collect(),
        }
    }

    fn body_with(addresses: &[String]) -> String {
        format!("reporting these sybil wallets\r\n{}", addresses.join("\r\n"))
    }

    fn writer(dir: &tempfile::TempDir) -> SummaryWriter {
        SummaryWriter::create(&dir.path().join("summary.csv")).expect("create summary")
    }

    #[tokio::test]
    async fn single_page_makes_exactly_one_request() {
        let source = MockSource::new(vec![IssuePage {
            issues: vec![issue(1, Some(body_with(&[addr('a')])), &[])],
            last_page: 0,
        }]);
        let wallets = WalletSet::from_addresses([addr('a')]);
        let dir = tempfile::tempdir().expect("temp dir");
        let mut summary = writer(&dir);

        let outcome = scan_issues(&source, &wallets, &mut summary)
            .await
            .expect("scan");

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.pages_fetched, 1);
        assert_eq!(outcome.reported.len(), 1);
    }

    #[tokio::test]
    async fn loop_performs_last_page_plus_one_requests() {
        // Server reports last page 2 throughout: pages 0, 1, 2 are fetched.
        let page = |n: u64| IssuePage {
            issues: vec![issue(n, Some(body_with(&[addr('a')])), &[])],
            last_page: 2,
        };
        let source = MockSource::new(vec![page(1), page(2), page(3)]);
        let wallets = WalletSet::from_addresses([addr('z')]);
        let dir = tempfile::tempdir().expect("temp dir");
        let mut summary = writer(&dir);

        let outcome = scan_issues(&source, &wallets, &mut summary)
            .await
            .expect("scan");

        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert_eq!(outcome.pages_fetched, 3);
        assert_eq!(outcome.issues_scanned, 3);
    }

    #[tokio::test]
    async fn summary_has_one_row_per_issue_with_a_body() {
        let source = MockSource::new(vec![IssuePage {
            issues: vec![
                issue(1, Some(body_with(&[addr('a'), addr('b')])), &["sybil", "confirmed"]),
                issue(2, None, &["skipped"]),
                issue(3, Some("too short".to_string()), &[]),
            ],
            last_page: 0,
        }]);
        let wallets = WalletSet::from_addresses([addr('a')]);
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("summary.csv");
        let mut summary = SummaryWriter::create(&path).expect("create summary");

        let outcome = scan_issues(&source, &wallets, &mut summary)
            .await
            .expect("scan");

        // Bodyless issue 2 produces no row; short-bodied issue 3 produces a
        // zero-candidate row.
        assert_eq!(outcome.issues_scanned, 2);
        let contents = std::fs::read_to_string(&path).expect("read summary");
        assert_eq!(contents, "1,open,sybil-confirmed,2,1\n3,open,,0,0\n");
    }

    #[tokio::test]
    async fn reported_set_deduplicates_across_issues() {
        let a = addr('a');
        let source = MockSource::new(vec![IssuePage {
            issues: vec![
                issue(1, Some(body_with(&[a.clone()])), &[]),
                issue(2, Some(body_with(&[a.to_uppercase().replace("0X", "0x")])), &[]),
            ],
            last_page: 0,
        }]);
        let wallets = WalletSet::from_addresses([a.clone()]);
        let dir = tempfile::tempdir().expect("temp dir");
        let mut summary = writer(&dir);

        let outcome = scan_issues(&source, &wallets, &mut summary)
            .await
            .expect("scan");

        assert_eq!(outcome.reported.len(), 1);
        assert!(outcome.reported.contains(&a));
    }

    #[tokio::test]
    async fn fetch_failure_is_fatal() {
        struct FailingSource;

        #[async_trait]
        impl IssueSource for FailingSource {
            async fn fetch_page(&self, _page: u32) -> Result<IssuePage, ScanError> {
                Err(ScanError::GitHub {
                    message: "boom".to_string(),
                })
            }
        }

        let wallets = WalletSet::from_addresses([addr('a')]);
        let dir = tempfile::tempdir().expect("temp dir");
        let mut summary = writer(&dir);

        let err = scan_issues(&FailingSource, &wallets, &mut summary)
            .await
            .unwrap_err();
        assert!(matches!(err, ScanError::GitHub { .. }));
    }
}
