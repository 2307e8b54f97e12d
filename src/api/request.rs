//! Request types for the payroll API.
//!
//! This module defines the JSON request structures for the `/payroll` and
//! `/workers/:name/payroll` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::parse_entry_date;
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationConfig, DailyEntry, PayPeriod, WorkerLedger, lenient};

/// Request body for the `/payroll` endpoint.
///
/// The compensation plan travels with the request. A `null` or missing plan
/// is accepted and yields a zeroed statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Optional worker name, echoed back in the response.
    #[serde(default)]
    pub worker: Option<String>,
    /// The worker's compensation plan.
    #[serde(default)]
    pub config: Option<CompensationConfig>,
    /// Daily entries to pay.
    pub entries: Vec<EntryRequest>,
    /// Restricts the run to entries inside this period.
    #[serde(default)]
    pub period: Option<PeriodRequest>,
}

/// Request body for the `/workers/:name/payroll` endpoint.
///
/// The compensation plan is taken from the loaded roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerPayrollRequest {
    /// Daily entries to pay.
    pub entries: Vec<EntryRequest>,
    /// Restricts the run to entries inside this period.
    #[serde(default)]
    pub period: Option<PeriodRequest>,
}

/// Pay period in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

/// A daily entry as submitted.
///
/// The date is kept as text so that a bad date is reported as an invalid
/// entry rather than a malformed body. A missing, `null` or numeric date
/// reaches the date parser too. Numeric fields are lenient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryRequest {
    /// Calendar date, or a timestamp whose written day is used.
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: String,
    /// Total cups sold.
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_cups: i64,
    /// Non-SKS cups sold.
    #[serde(default, deserialize_with = "lenient::count")]
    pub non_sks_cups: i64,
    /// Cash advance (kasbon) taken.
    #[serde(default, deserialize_with = "lenient::money")]
    pub cash_advance: Decimal,
    /// Register shortfall (minus).
    #[serde(default, deserialize_with = "lenient::money")]
    pub shortfall: Decimal,
    /// Value of stock lost to expiry.
    #[serde(default, deserialize_with = "lenient::money")]
    pub expired_loss: Decimal,
}

impl TryFrom<EntryRequest> for DailyEntry {
    type Error = EngineError;

    fn try_from(req: EntryRequest) -> EngineResult<Self> {
        let date = parse_entry_date(&req.date)?;
        Ok(DailyEntry::new(date, req.total_cups, req.non_sks_cups).with_deductions(
            req.cash_advance,
            req.shortfall,
            req.expired_loss,
        ))
    }
}

impl TryFrom<PeriodRequest> for PayPeriod {
    type Error = EngineError;

    fn try_from(req: PeriodRequest) -> EngineResult<Self> {
        PayPeriod::new(req.start_date, req.end_date)
    }
}

/// Turns submitted entries into the entries to pay.
///
/// Every date must parse; one bad date fails the whole request. Entries
/// sharing a date collapse to the last one submitted, and entries outside
/// `period` are dropped. The result is in ascending date order.
pub(crate) fn collect_entries(
    worker: &str,
    entries: Vec<EntryRequest>,
    period: Option<&PayPeriod>,
) -> EngineResult<Vec<DailyEntry>> {
    let parsed = entries
        .into_iter()
        .map(DailyEntry::try_from)
        .collect::<EngineResult<Vec<_>>>()?;

    let ledger = WorkerLedger::from_entries(worker, parsed);

    Ok(match period {
        Some(period) => ledger.entries_in(period),
        None => ledger.entries().cloned().collect(),
    })
}
