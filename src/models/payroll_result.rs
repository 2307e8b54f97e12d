//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and its associated
//! structures: the weekly bonus breakdown and the audit trace recording every
//! rule the engine applied.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::capped::capped_sum;

/// The weekly bonus outcome for one ISO week.
///
/// # Example
///
/// ```
/// use shift_payroll::models::WeeklyBonus;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let week = WeeklyBonus {
///     week_key: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     cups_that_week: 110,
///     bonus_that_week: Decimal::from(30000),
/// };
/// assert_eq!(week.week_key.to_string(), "2024-01-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyBonus {
    /// The Monday that starts the week.
    pub week_key: NaiveDate,
    /// Total cups across all entries of the week.
    pub cups_that_week: i64,
    /// Bonus resolved from the weekly ladder.
    pub bonus_that_week: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number, starting at 1.
    pub step_number: u32,
    /// Machine-readable identifier of the rule that was applied.
    pub rule_id: String,
    /// Human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag data worth a second look without changing the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The ordered record of every rule application in one payroll run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The itemized pay statement produced by
/// [`compute_payroll`](crate::calculation::compute_payroll).
///
/// A result is derived from scratch for each `(entries, config)` pair and is
/// never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// `days_worked × daily_base_wage`.
    pub base_wage_total: Decimal,
    /// Per-cup commission on non-SKS cups.
    pub commission_total: Decimal,
    /// Sum of the daily attendance bonuses.
    pub attendance_bonus_total: Decimal,
    /// Sum of the weekly volume bonuses.
    pub weekly_bonus_total: Decimal,
    /// Sum of cash advances.
    pub cash_advance_total: Decimal,
    /// Sum of register shortfalls.
    pub shortfall_total: Decimal,
    /// Sum of expired stock charges.
    pub expired_loss_total: Decimal,
    /// Total cups across all entries.
    pub total_cups_all: i64,
    /// Total non-SKS cups across all entries.
    pub total_non_sks_all: i64,
    /// Number of entries processed.
    pub days_worked: u32,
    /// One record per distinct week, ascending by week key.
    pub weekly_breakdown: Vec<WeeklyBonus>,
    /// Sum of the four earning categories.
    pub gross_pay: Decimal,
    /// Sum of the three deduction categories.
    pub total_deductions: Decimal,
    /// `gross_pay - total_deductions`; may be negative.
    pub net_pay: Decimal,
    /// Every rule application and warning of the run.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// A result with every monetary figure at zero.
    ///
    /// Used when no compensation plan is attached yet: the days are still
    /// counted so a caller can show how many were logged.
    pub fn zeroed(days_worked: u32) -> Self {
        Self {
            base_wage_total: Decimal::ZERO,
            commission_total: Decimal::ZERO,
            attendance_bonus_total: Decimal::ZERO,
            weekly_bonus_total: Decimal::ZERO,
            cash_advance_total: Decimal::ZERO,
            shortfall_total: Decimal::ZERO,
            expired_loss_total: Decimal::ZERO,
            total_cups_all: 0,
            total_non_sks_all: 0,
            days_worked,
            weekly_breakdown: Vec::new(),
            gross_pay: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            net_pay: Decimal::ZERO,
            audit_trace: AuditTrace::default(),
        }
    }

    /// Combined attendance and weekly bonuses, held at `Decimal::MAX`.
    pub fn bonus_total(&self) -> Decimal {
        capped_sum([self.attendance_bonus_total, self.weekly_bonus_total])
    }
}
