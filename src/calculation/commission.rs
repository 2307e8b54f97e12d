//! Per-cup commission.
//!
//! Commission is paid on the day's non-SKS cups at the configured rate. When
//! the worker's plan sets `min_cups_for_commission`, a day whose total cups
//! fall short of it earns nothing, unless the plan's
//! [`CommissionGate`] is `Ignored`.

use rust_decimal::Decimal;

use crate::models::{CommissionGate, CompensationConfig};

/// The commission earned by a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionResult {
    /// Amount earned; zero when the gate blocks the day.
    pub amount: Decimal,
    /// Whether the day met the minimum-cup threshold.
    pub threshold_met: bool,
    /// Whether the threshold was applied to this day.
    pub gated: bool,
    /// Whether the amount was held at `Decimal::MAX` because the product
    /// does not fit.
    pub capped: bool,
}

/// Calculates one day's commission.
///
/// Both counts are clamped to non-negative before use, as are the rate and
/// the threshold. A product too large for `Decimal` is held at
/// `Decimal::MAX`.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::calculate_commission;
/// use shift_payroll::models::CompensationConfig;
/// use rust_decimal::Decimal;
///
/// let config = CompensationConfig {
///     per_cup_commission_rate: Decimal::from(500),
///     min_cups_for_commission: 30,
///     ..Default::default()
/// };
///
/// assert_eq!(calculate_commission(30, 25, &config).amount, Decimal::from(12500));
/// assert_eq!(calculate_commission(29, 25, &config).amount, Decimal::ZERO);
/// ```
pub fn calculate_commission(
    total_cups: i64,
    non_sks_cups: i64,
    config: &CompensationConfig,
) -> CommissionResult {
    let total_cups = total_cups.max(0);
    let non_sks_cups = non_sks_cups.max(0);
    let rate = config.per_cup_commission_rate.max(Decimal::ZERO);
    let threshold = config.min_cups_for_commission.max(0);

    let threshold_met = total_cups >= threshold;
    let gated = config.commission_gate == CommissionGate::Enforced;

    let (amount, capped) = if gated && !threshold_met {
        (Decimal::ZERO, false)
    } else {
        match Decimal::from(non_sks_cups).checked_mul(rate) {
            Some(amount) => (amount, false),
            None => (Decimal::MAX, true),
        }
    };

    CommissionResult {
        amount,
        threshold_met,
        gated,
        capped,
    }
}
