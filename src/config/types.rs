//! Configuration types for branch payroll.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::CompensationConfig;

/// Metadata about the branch whose workers are configured.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchMetadata {
    /// Short branch code (e.g., "KIOS-01").
    pub code: String,
    /// The human-readable name of the branch.
    pub name: String,
    /// Currency the amounts are denominated in, informational only.
    #[serde(default)]
    pub currency: Option<String>,
}

/// Compensation plans for every worker of a branch, keyed by worker name.
///
/// Names are kept in sorted order so that listings are stable.
#[derive(Debug, Clone)]
pub struct Roster {
    metadata: BranchMetadata,
    workers: BTreeMap<String, CompensationConfig>,
}

impl Roster {
    /// Creates a roster from branch metadata and per-worker plans.
    pub fn new(metadata: BranchMetadata, workers: BTreeMap<String, CompensationConfig>) -> Self {
        Self { metadata, workers }
    }

    /// Returns the branch metadata.
    pub fn branch(&self) -> &BranchMetadata {
        &self.metadata
    }

    /// Returns every worker's plan.
    pub fn workers(&self) -> &BTreeMap<String, CompensationConfig> {
        &self.workers
    }
}
