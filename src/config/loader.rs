//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a branch
//! roster from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CompensationConfig;

use super::types::{BranchMetadata, Roster};

/// Loads and provides access to a branch roster.
///
/// # Directory Structure
///
/// ```text
/// config/kios/
/// ├── branch.yaml      # Branch metadata
/// └── workers/
///     ├── andi.yaml    # One compensation plan per worker,
///     └── budi.yaml    # named after the file stem
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/kios").unwrap();
///
/// let plan = loader.get_worker("andi").unwrap();
/// println!("Daily wage: {}", plan.daily_base_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    roster: Roster,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - `branch.yaml` or the `workers` directory is missing
    /// - Any file contains invalid YAML
    ///
    /// An empty `workers` directory is valid and yields an empty roster.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/kios")?;
    /// # Ok::<(), shift_payroll::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<BranchMetadata>(&path.join("branch.yaml"))?;
        let workers = Self::load_workers(&path.join("workers"))?;

        debug!(
            branch = %metadata.code,
            workers = workers.len(),
            "branch roster loaded"
        );

        Ok(Self {
            roster: Roster::new(metadata, workers),
        })
    }

    /// Builds a loader from an in-memory roster.
    pub fn from_roster(roster: Roster) -> Self {
        Self { roster }
    }

    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every `*.yaml` / `*.yml` plan in the workers directory.
    fn load_workers(workers_dir: &Path) -> EngineResult<BTreeMap<String, CompensationConfig>> {
        let workers_dir_str = workers_dir.display().to_string();

        let entries = fs::read_dir(workers_dir).map_err(|_| EngineError::ConfigNotFound {
            path: workers_dir_str.clone(),
        })?;

        let mut workers = BTreeMap::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: workers_dir_str.clone(),
            })?;

            let path = entry.path();
            let is_yaml = path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml");
            if !is_yaml {
                continue;
            }

            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let name = name.to_string();
            let plan = Self::load_yaml::<CompensationConfig>(&path)?;
            workers.insert(name, plan);
        }

        Ok(workers)
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the branch metadata.
    pub fn branch(&self) -> &BranchMetadata {
        self.roster.branch()
    }

    /// Returns the names of all configured workers, sorted.
    pub fn workers(&self) -> impl Iterator<Item = &str> {
        self.roster.workers().keys().map(String::as_str)
    }

    /// Gets a worker's compensation plan by name.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shift_payroll::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/kios")?;
    /// let plan = loader.get_worker("andi")?;
    /// println!("Commission per cup: {}", plan.per_cup_commission_rate);
    /// # Ok::<(), shift_payroll::error::EngineError>(())
    /// ```
    pub fn get_worker(&self, name: &str) -> EngineResult<&CompensationConfig> {
        self.roster
            .workers()
            .get(name)
            .ok_or_else(|| EngineError::WorkerNotFound {
                name: name.to_string(),
            })
    }
}
