//! Compensation configuration models.
//!
//! This module contains the per-worker pay rules: daily base wage, per-cup
//! commission and the two bonus ladders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::lenient;

/// A single rung of a bonus ladder.
///
/// A measure qualifies for the tier when it is at least `minimum`. Ladders are
/// not required to be sorted, and a lower rung may pay more than a higher one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTier {
    /// Smallest measure (cups) that qualifies.
    #[serde(default, alias = "min", deserialize_with = "lenient::count")]
    pub minimum: i64,
    /// Bonus paid when this tier wins.
    #[serde(default, deserialize_with = "lenient::money")]
    pub bonus: Decimal,
}

impl BonusTier {
    /// Creates a tier.
    pub fn new(minimum: i64, bonus: Decimal) -> Self {
        Self { minimum, bonus }
    }
}

/// Whether `min_cups_for_commission` gates the per-cup commission.
///
/// The settings screen has always described the threshold as "commission
/// only applies when total cups reach this value", but earlier payroll runs
/// paid commission on every day regardless. `Ignored` reproduces those runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionGate {
    /// Days below the threshold earn no commission.
    #[default]
    Enforced,
    /// Commission accrues on every day; the threshold is informational.
    Ignored,
}

/// One worker's pay rules.
///
/// Every field defaults to zero or empty, matching a freshly added worker
/// whose plan has not been filled in yet.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{BonusTier, CompensationConfig};
/// use rust_decimal::Decimal;
///
/// let config = CompensationConfig {
///     daily_base_wage: Decimal::from(50000),
///     per_cup_commission_rate: Decimal::from(500),
///     attendance_tiers: vec![BonusTier::new(20, Decimal::from(10000))],
///     weekly_tiers: vec![BonusTier::new(100, Decimal::from(30000))],
///     ..Default::default()
/// };
/// assert_eq!(config.min_cups_for_commission, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationConfig {
    /// Wage paid for each day with an entry.
    #[serde(default, deserialize_with = "lenient::money")]
    pub daily_base_wage: Decimal,
    /// Commission paid per non-SKS cup.
    #[serde(default, deserialize_with = "lenient::money")]
    pub per_cup_commission_rate: Decimal,
    /// Total cups a day needs before it earns commission.
    #[serde(default, deserialize_with = "lenient::count")]
    pub min_cups_for_commission: i64,
    /// How `min_cups_for_commission` is applied. An unrecognised value reads
    /// as [`CommissionGate::Enforced`].
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub commission_gate: CommissionGate,
    /// Daily bonus ladder keyed on the day's total cups.
    #[serde(default)]
    pub attendance_tiers: Vec<BonusTier>,
    /// Weekly bonus ladder keyed on the ISO week's total cups.
    #[serde(default)]
    pub weekly_tiers: Vec<BonusTier>,
}
