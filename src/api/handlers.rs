//! HTTP request handlers for the payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll;
use crate::error::EngineResult;
use crate::models::{CompensationConfig, DailyEntry, PayPeriod};

use super::request::{
    EntryRequest, PayrollRequest, PeriodRequest, WorkerPayrollRequest, collect_entries,
};
use super::response::{ApiError, ApiErrorResponse, PayrollResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll", post(payroll_handler))
        .route("/workers/:name/payroll", post(worker_payroll_handler))
        .with_state(state)
}

/// Handler for POST /payroll.
///
/// Pays the submitted entries under the plan carried in the request body.
async fn payroll_handler(payload: Result<Json<PayrollRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if request.config.is_none() {
        warn!(
            correlation_id = %correlation_id,
            "No compensation plan in request; result will be zeroed"
        );
    }

    run_payroll(
        correlation_id,
        request.worker,
        request.config.as_ref(),
        request.entries,
        request.period,
    )
}

/// Handler for POST /workers/:name/payroll.
///
/// Pays the submitted entries under the named worker's plan from the roster.
async fn worker_payroll_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    payload: Result<Json<WorkerPayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, worker = %name, "Processing worker payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let config = match state.config().get_worker(&name) {
        Ok(config) => config,
        Err(err) => {
            warn!(correlation_id = %correlation_id, worker = %name, "Worker not found");
            return error_response(err.into());
        }
    };

    run_payroll(
        correlation_id,
        Some(name),
        Some(config),
        request.entries,
        request.period,
    )
}

fn run_payroll(
    correlation_id: Uuid,
    worker: Option<String>,
    config: Option<&CompensationConfig>,
    entries: Vec<EntryRequest>,
    period: Option<PeriodRequest>,
) -> Response {
    let start_time = Instant::now();
    let submitted = entries.len();

    let prepared = prepare(worker.as_deref().unwrap_or_default(), entries, period);
    let (period, entries) = match prepared {
        Ok(prepared) => prepared,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll request rejected"
            );
            return error_response(err.into());
        }
    };

    let result = compute_payroll(&entries, config);

    info!(
        correlation_id = %correlation_id,
        worker = worker.as_deref().unwrap_or("-"),
        entries_submitted = submitted,
        days_worked = result.days_worked,
        net_pay = %result.net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Payroll computed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(PayrollResponse::new(worker, period, result)),
    )
        .into_response()
}

fn prepare(
    worker: &str,
    entries: Vec<EntryRequest>,
    period: Option<PeriodRequest>,
) -> EngineResult<(Option<PayPeriod>, Vec<DailyEntry>)> {
    let period = period.map(PayPeriod::try_from).transpose()?;
    let entries = collect_entries(worker, entries, period.as_ref())?;
    Ok((period, entries))
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    error_response(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn error_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
