//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints that compute a worker's pay
//! statement from submitted daily entries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EntryRequest, PayrollRequest, PeriodRequest, WorkerPayrollRequest};
pub use response::{ApiError, ApiErrorResponse, PayrollResponse};
pub use state::AppState;
