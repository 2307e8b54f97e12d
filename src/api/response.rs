//! Response types for the payroll API.
//!
//! This module defines the success envelope, the error response structures
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{PayPeriod, PayrollResult};

/// Successful payroll response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The worker paid, when known.
    pub worker: Option<String>,
    /// The period the entries were restricted to, if any.
    pub period: Option<PayPeriod>,
    /// The itemized pay statement.
    pub result: PayrollResult,
}

impl PayrollResponse {
    /// Wraps a result with a fresh id and timestamp.
    pub fn new(worker: Option<String>, period: Option<PayPeriod>, result: PayrollResult) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            worker,
            period,
            result,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a worker not found error response.
    pub fn worker_not_found(name: &str) -> Self {
        Self::with_details(
            "WORKER_NOT_FOUND",
            format!("Worker not found: {}", name),
            format!("No compensation plan is configured for '{}'", name),
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::WorkerNotFound { name } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::worker_not_found(&name),
            },
            EngineError::InvalidEntry { date, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ENTRY",
                    format!("Invalid entry dated '{}': {}", date, message),
                    "Every entry needs a date such as 2024-01-31",
                ),
            },
            EngineError::InvalidPeriod { start, end } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Pay period ends on {} before it starts on {}", end, start),
                    "end_date must not be earlier than start_date",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_worker_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::WorkerNotFound {
            name: "joko".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "WORKER_NOT_FOUND");
        assert!(api_error.error.message.contains("joko"));
    }

    #[test]
    fn test_invalid_entry_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidEntry {
            date: "Invalid Date".to_string(),
            message: "expected YYYY-MM-DD".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_ENTRY");
    }

    #[test]
    fn test_invalid_period_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::InvalidPeriod {
            start: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_PERIOD");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "branch.yaml".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_response_envelope_carries_version() {
        let response = PayrollResponse::new(Some("andi".to_string()), None, PayrollResult::zeroed(0));
        assert_eq!(response.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(response.worker.as_deref(), Some("andi"));
    }
}
