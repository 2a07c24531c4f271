// SPDX-License-Identifier: Apache-2.0

//! Sybilscan - wallet exposure check against the sybil-report tracker.
//!
//! A CLI tool that cross-references the user's wallet addresses against a
//! static flagged list and the issues of the LayerZero-Labs/sybil-report
//! repository, writing a per-issue summary CSV.

mod cli;
mod config;
mod error;
mod errors;
mod github;
mod initial_list;
mod logging;
mod scanner;
mod summary;
mod wallets;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::error::ScanError;
use crate::github::issues::GitHubIssueSource;
use crate::summary::{SUMMARY_FILE, SummaryWriter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    match run(&cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            std::process::exit(1);
        }
    }
}

/// Runs the pipeline: config, wallet set, initial-list check, issue scan.
///
/// Strictly sequential; the first failure aborts the run.
async fn run(cli: &Cli) -> Result<()> {
    let config =
        config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    config.require_inputs()?;
    debug!("Configuration loaded successfully");

    let wallets = wallets::load_wallet_set(Path::new(&config.inputs.wallets_file))?;
    initial_list::check_initial_list(Path::new(&config.inputs.initial_list_file), &wallets)?;

    let (token, source) = github::auth::resolve_token(&config).ok_or(ScanError::NotAuthenticated)?;
    debug!(source = %source, "Resolved GitHub token");
    let client = github::auth::create_client(&token)?;
    let issues = GitHubIssueSource::new(client, github::REPORT_OWNER, github::REPORT_REPO);

    let mut summary = SummaryWriter::create(Path::new(SUMMARY_FILE))?;
    scanner::scan_issues(&issues, &wallets, &mut summary).await?;

    Ok(())
}
