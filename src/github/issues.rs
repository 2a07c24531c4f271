// SPDX-License-Identifier: Apache-2.0

//! Paginated issue listing for the report repository.
//!
//! The scanner consumes issues through the [`IssueSource`] trait so the
//! pagination loop can be exercised against mocked pages in tests. The real
//! implementation wraps octocrab's issue listing endpoint.

use async_trait::async_trait;
use octocrab::{Octocrab, params};
use tracing::{debug, instrument, warn};

use super::PAGE_SIZE;
use crate::error::ScanError;

/// One issue as returned by the tracker, reduced to the fields the scanner
/// consumes.
#[derive(Debug, Clone)]
pub struct ReportedIssue {
    /// Issue number.
    pub number: u64,
    /// Issue state, lowercase ("open" / "closed").
    pub state: String,
    /// Issue body text; `None` for bodyless issues.
    pub body: Option<String>,
    /// Label names in API order.
    pub labels: Vec<String>,
}

/// One page of issues plus the server-reported last page index.
///
/// `last_page` is 0 when the API reports a single page of results.
#[derive(Debug, Clone, Default)]
pub struct IssuePage {
    /// Issues in API order.
    pub issues: Vec<ReportedIssue>,
    /// Last page index reported by the server for this response.
    pub last_page: u32,
}

/// Source of paginated issue data.
#[async_trait]
pub trait IssueSource {
    /// Fetches one page of issues, all states.
    async fn fetch_page(&self, page: u32) -> Result<IssuePage, ScanError>;
}

/// [`IssueSource`] backed by the GitHub REST API.
pub struct GitHubIssueSource {
    client: Octocrab,
    owner: String,
    repo: String,
}

impl GitHubIssueSource {
    /// Creates a source for one repository.
    pub fn new(client: Octocrab, owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            client,
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

#[async_trait]
impl IssueSource for GitHubIssueSource {
    #[instrument(skip(self), fields(owner = %self.owner, repo = %self.repo))]
    async fn fetch_page(&self, page: u32) -> Result<IssuePage, ScanError> {
        debug!("Fetching issue page");

        let response = self
            .client
            .issues(&self.owner, &self.repo)
            .list()
            .state(params::State::All)
            .per_page(PAGE_SIZE)
            .page(page)
            .send()
            .await?;

        // Non-fatal soft check; transport and API errors already returned Err.
        if response.incomplete_results == Some(true) {
            warn!(page, "issue listing returned incomplete results");
        }

        let last_page = response.number_of_pages().unwrap_or(0);
        let issues: Vec<ReportedIssue> = response
            .items
            .into_iter()
            .map(|issue| ReportedIssue {
                number: issue.number,
                state: format!("{:?}", issue.state).to_lowercase(),
                body: issue.body,
                labels: issue.labels.iter().map(|l| l.name.clone()).collect(),
            })
            .collect();

        debug!(count = issues.len(), last_page, "Fetched issue page");

        Ok(IssuePage { issues, last_page })
    }
}
