//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod compensation;
mod entry;
mod ledger;
pub(crate) mod lenient;
mod pay_period;
mod payroll_result;

pub use compensation::{BonusTier, CommissionGate, CompensationConfig};
pub use entry::DailyEntry;
pub use ledger::WorkerLedger;
pub use pay_period::PayPeriod;
pub use payroll_result::{AuditStep, AuditTrace, AuditWarning, PayrollResult, WeeklyBonus};
