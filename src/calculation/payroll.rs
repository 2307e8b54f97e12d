//! Payroll computation.
//!
//! [`compute_payroll`] folds a worker's daily entries under their
//! compensation plan into a fully itemized [`PayrollResult`]. The function is
//! pure: the same inputs always produce the same result, audit trace
//! included.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CompensationConfig, DailyEntry, PayrollResult,
    WeeklyBonus,
};

use super::capped::CappedMath;
use super::commission::calculate_commission;
use super::tier_resolution::resolve_tier;
use super::week_key::week_key_of;

/// Collects audit steps and warnings, numbering steps from 1.
#[derive(Default)]
struct TraceBuilder {
    trace: AuditTrace,
}

impl TraceBuilder {
    fn step(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = u32::try_from(self.trace.steps.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        self.trace.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.trace.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }

    fn finish(self) -> AuditTrace {
        self.trace
    }
}

/// Computes an itemized pay statement from daily entries and a compensation plan.
///
/// # Behaviour
///
/// - `days_worked` is the number of entries; each earns `daily_base_wage`.
/// - Each entry earns per-cup commission on its non-SKS cups (subject to the
///   plan's minimum-cup gate) and an attendance bonus resolved from
///   `attendance_tiers` on its total cups.
/// - Entries are bucketed by the Monday of their ISO week; each week earns a
///   bonus resolved from `weekly_tiers` on its summed total cups. The
///   breakdown is ordered by week key, ascending.
/// - Every numeric input is clamped to non-negative; nothing here fails.
/// - `net_pay` is `gross_pay - total_deductions` and may be negative.
/// - Amounts that would exceed `Decimal::MAX` are held there and a
///   `NUMERIC_OVERFLOW` warning is recorded.
///
/// When `config` is `None` the result is all zeros except `days_worked`, so a
/// caller can still show how many days were logged before a plan exists.
///
/// Entries sharing a date are each counted; a warning is recorded for every
/// repeated date.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::compute_payroll;
/// use shift_payroll::models::{BonusTier, CompensationConfig, DailyEntry};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = CompensationConfig {
///     daily_base_wage: Decimal::from(50000),
///     per_cup_commission_rate: Decimal::from(500),
///     attendance_tiers: vec![BonusTier::new(20, Decimal::from(10000))],
///     weekly_tiers: vec![BonusTier::new(100, Decimal::from(30000))],
///     ..Default::default()
/// };
/// let entries = vec![
///     DailyEntry::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 30, 25),
///     DailyEntry::new(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(), 80, 60),
/// ];
///
/// let result = compute_payroll(&entries, Some(&config));
///
/// assert_eq!(result.gross_pay, Decimal::from(192500));
/// assert_eq!(result.net_pay, Decimal::from(192500));
/// assert_eq!(result.weekly_breakdown[0].cups_that_week, 110);
/// ```
pub fn compute_payroll(
    entries: &[DailyEntry],
    config: Option<&CompensationConfig>,
) -> PayrollResult {
    let days_worked = u32::try_from(entries.len()).unwrap_or(u32::MAX);
    let mut trace = TraceBuilder::default();

    let Some(config) = config else {
        trace.warn(
            "NO_COMPENSATION_CONFIG",
            format!(
                "{} day(s) logged but no compensation plan is attached; all amounts are zero",
                days_worked
            ),
            "medium",
        );
        let mut result = PayrollResult::zeroed(days_worked);
        result.audit_trace = trace.finish();
        debug!(days_worked, "payroll computed without compensation config");
        return result;
    };

    let mut math = CappedMath::default();
    let mut commission_capped = false;

    let daily_base_wage = config.daily_base_wage.max(Decimal::ZERO);
    let base_wage_total = math.mul(Decimal::from(days_worked), daily_base_wage);
    trace.step(
        "base_wage",
        "Daily Base Wage",
        serde_json::json!({
            "days_worked": days_worked,
            "daily_base_wage": daily_base_wage.normalize().to_string()
        }),
        serde_json::json!({
            "amount": base_wage_total.normalize().to_string()
        }),
        format!(
            "{} day(s) × {} = {}",
            days_worked,
            daily_base_wage.normalize(),
            base_wage_total.normalize()
        ),
    );

    let mut commission_total = Decimal::ZERO;
    let mut attendance_bonus_total = Decimal::ZERO;
    let mut cash_advance_total = Decimal::ZERO;
    let mut shortfall_total = Decimal::ZERO;
    let mut expired_loss_total = Decimal::ZERO;
    let mut total_cups_all: i64 = 0;
    let mut total_non_sks_all: i64 = 0;
    let mut weekly_cups: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    let mut seen_dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for entry in entries {
        if !seen_dates.insert(entry.date) {
            trace.warn(
                "DUPLICATE_ENTRY_DATE",
                format!(
                    "More than one entry is dated {}; each one is counted",
                    entry.date
                ),
                "high",
            );
        }

        let has_negative = entry.total_cups < 0
            || entry.non_sks_cups < 0
            || entry.cash_advance < Decimal::ZERO
            || entry.shortfall < Decimal::ZERO
            || entry.expired_loss < Decimal::ZERO;
        if has_negative {
            trace.warn(
                "NEGATIVE_INPUT_CLAMPED",
                format!("Entry dated {} has negative values; they count as zero", entry.date),
                "low",
            );
        }

        let total_cups = entry.total_cups.max(0);
        let non_sks_cups = entry.non_sks_cups.max(0);
        total_cups_all = total_cups_all.saturating_add(total_cups);
        total_non_sks_all = total_non_sks_all.saturating_add(non_sks_cups);

        let commission = calculate_commission(total_cups, non_sks_cups, config);
        commission_capped |= commission.capped;
        math.accumulate(&mut commission_total, commission.amount);

        let attendance = resolve_tier(total_cups, &config.attendance_tiers);
        math.accumulate(&mut attendance_bonus_total, attendance.bonus);

        let cash_advance = entry.cash_advance.max(Decimal::ZERO);
        let shortfall = entry.shortfall.max(Decimal::ZERO);
        let expired_loss = entry.expired_loss.max(Decimal::ZERO);
        math.accumulate(&mut cash_advance_total, cash_advance);
        math.accumulate(&mut shortfall_total, shortfall);
        math.accumulate(&mut expired_loss_total, expired_loss);
        let entry_deductions = math.add(cash_advance, shortfall);
        let entry_deductions = math.add(entry_deductions, expired_loss);

        let week_key = week_key_of(entry.date);
        if week_key.weekday() != Weekday::Mon {
            trace.warn(
                "WEEK_KEY_OUT_OF_RANGE",
                format!(
                    "Entry dated {} falls in a week that starts before the earliest supported date; grouped under {}",
                    entry.date, week_key
                ),
                "medium",
            );
        }
        let week_total = weekly_cups.entry(week_key).or_insert(0);
        *week_total = week_total.saturating_add(total_cups);

        let reasoning = if commission.gated && !commission.threshold_met {
            format!(
                "{} cups below commission minimum {}; no commission. Attendance bonus {}",
                total_cups,
                config.min_cups_for_commission.max(0),
                attendance.bonus.normalize()
            )
        } else {
            format!(
                "{} non-SKS cups × {} = {} commission. Attendance bonus {}",
                non_sks_cups,
                config.per_cup_commission_rate.max(Decimal::ZERO).normalize(),
                commission.amount.normalize(),
                attendance.bonus.normalize()
            )
        };

        trace.step(
            "daily_entry",
            "Daily Commission and Attendance",
            serde_json::json!({
                "date": entry.date.to_string(),
                "total_cups": entry.total_cups,
                "non_sks_cups": entry.non_sks_cups,
                "cash_advance": entry.cash_advance.normalize().to_string(),
                "shortfall": entry.shortfall.normalize().to_string(),
                "expired_loss": entry.expired_loss.normalize().to_string()
            }),
            serde_json::json!({
                "commission": commission.amount.normalize().to_string(),
                "commission_threshold_met": commission.threshold_met,
                "attendance_bonus": attendance.bonus.normalize().to_string(),
                "attendance_tier": attendance.tier_index,
                "deductions": entry_deductions.normalize().to_string(),
                "week_key": week_key.to_string()
            }),
            reasoning,
        );
    }

    let mut weekly_breakdown = Vec::with_capacity(weekly_cups.len());
    let mut weekly_bonus_total = Decimal::ZERO;

    for (week_key, cups_that_week) in weekly_cups {
        let resolution = resolve_tier(cups_that_week, &config.weekly_tiers);
        math.accumulate(&mut weekly_bonus_total, resolution.bonus);

        trace.step(
            "weekly_bonus",
            "Weekly Volume Bonus",
            serde_json::json!({
                "week_key": week_key.to_string(),
                "cups_that_week": cups_that_week
            }),
            serde_json::json!({
                "bonus": resolution.bonus.normalize().to_string(),
                "tier": resolution.tier_index
            }),
            match resolution.tier_index {
                Some(index) => format!(
                    "Week of {}: {} cups qualifies for tier {} paying {}",
                    week_key,
                    cups_that_week,
                    index,
                    resolution.bonus.normalize()
                ),
                None => format!(
                    "Week of {}: {} cups reaches no weekly tier",
                    week_key, cups_that_week
                ),
            },
        );

        weekly_breakdown.push(WeeklyBonus {
            week_key,
            cups_that_week,
            bonus_that_week: resolution.bonus,
        });
    }

    let mut gross_pay = base_wage_total;
    for component in [commission_total, attendance_bonus_total, weekly_bonus_total] {
        math.accumulate(&mut gross_pay, component);
    }
    let mut total_deductions = cash_advance_total;
    for component in [shortfall_total, expired_loss_total] {
        math.accumulate(&mut total_deductions, component);
    }
    // Both sides are non-negative, so the difference always fits.
    let net_pay = gross_pay - total_deductions;

    trace.step(
        "totals",
        "Gross, Deductions and Net Pay",
        serde_json::json!({
            "base_wage_total": base_wage_total.normalize().to_string(),
            "commission_total": commission_total.normalize().to_string(),
            "attendance_bonus_total": attendance_bonus_total.normalize().to_string(),
            "weekly_bonus_total": weekly_bonus_total.normalize().to_string(),
            "cash_advance_total": cash_advance_total.normalize().to_string(),
            "shortfall_total": shortfall_total.normalize().to_string(),
            "expired_loss_total": expired_loss_total.normalize().to_string()
        }),
        serde_json::json!({
            "gross_pay": gross_pay.normalize().to_string(),
            "total_deductions": total_deductions.normalize().to_string(),
            "net_pay": net_pay.normalize().to_string()
        }),
        format!(
            "{} gross - {} deductions = {} net",
            gross_pay.normalize(),
            total_deductions.normalize(),
            net_pay.normalize()
        ),
    );

    if math.overflowed() || commission_capped {
        warn!(days_worked, "payroll amounts capped at the largest representable value");
        trace.warn(
            "NUMERIC_OVERFLOW",
            format!(
                "Amounts exceeded the largest representable value and were capped at {}",
                Decimal::MAX
            ),
            "high",
        );
    }

    if net_pay < Decimal::ZERO {
        trace.warn(
            "NEGATIVE_NET_PAY",
            format!("Deductions exceed earnings; net pay is {}", net_pay.normalize()),
            "medium",
        );
    }

    debug!(
        days_worked,
        weeks = weekly_breakdown.len(),
        gross_pay = %gross_pay,
        net_pay = %net_pay,
        "payroll computed"
    );

    PayrollResult {
        base_wage_total,
        commission_total,
        attendance_bonus_total,
        weekly_bonus_total,
        cash_advance_total,
        shortfall_total,
        expired_loss_total,
        total_cups_all,
        total_non_sks_all,
        days_worked,
        weekly_breakdown,
        gross_pay,
        total_deductions,
        net_pay,
        audit_trace: trace.finish(),
    }
}
