//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation core itself never fails: malformed numbers are clamped to
//! zero and a missing configuration yields a zeroed result. Errors only arise
//! at the edges, when configuration is loaded or when raw text is turned into
//! typed entries.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::WorkerNotFound {
///     name: "budi".to_string(),
/// };
/// assert_eq!(error.to_string(), "Worker not found: budi");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No compensation configuration exists for the named worker.
    #[error("Worker not found: {name}")]
    WorkerNotFound {
        /// The worker name that was looked up.
        name: String,
    },

    /// A daily entry carried a date that could not be interpreted.
    #[error("Invalid entry dated '{date}': {message}")]
    InvalidEntry {
        /// The raw date text as received.
        date: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A pay period ended before it started.
    #[error("Invalid pay period: end {end} is before start {start}")]
    InvalidPeriod {
        /// The first day of the period.
        start: NaiveDate,
        /// The last day of the period.
        end: NaiveDate,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/branch.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/branch.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/workers/budi.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/workers/budi.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_worker_not_found_displays_name() {
        let error = EngineError::WorkerNotFound {
            name: "sari".to_string(),
        };
        assert_eq!(error.to_string(), "Worker not found: sari");
    }

    #[test]
    fn test_invalid_entry_displays_date_and_message() {
        let error = EngineError::InvalidEntry {
            date: "2024-13-45".to_string(),
            message: "not a calendar date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entry dated '2024-13-45': not a calendar date"
        );
    }

    #[test]
    fn test_invalid_period_displays_bounds() {
        let error = EngineError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid pay period: end 2024-01-31 is before start 2024-02-01"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_worker_not_found() -> EngineResult<()> {
            Err(EngineError::WorkerNotFound {
                name: "nobody".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_worker_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
