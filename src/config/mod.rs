//! Configuration loading for the payroll engine.
//!
//! This module loads a branch roster from YAML files: the branch metadata
//! and one compensation plan per worker.
//!
//! # Example
//!
//! ```no_run
//! use shift_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/kios").unwrap();
//! println!("Loaded branch: {}", config.branch().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BranchMetadata, Roster};
