// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides token resolution and the paginated issue source for the fixed
//! report repository.

pub mod auth;
pub mod issues;

/// Owner of the crowd-sourced sybil report repository.
pub const REPORT_OWNER: &str = "LayerZero-Labs";

/// Name of the crowd-sourced sybil report repository.
pub const REPORT_REPO: &str = "sybil-report";

/// Issues fetched per page.
pub const PAGE_SIZE: u8 = 100;
