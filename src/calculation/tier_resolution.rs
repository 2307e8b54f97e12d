//! Bonus tier resolution.
//!
//! Both bonus ladders (daily attendance and weekly volume) are resolved the
//! same way: among all tiers the measure reaches, the one paying the most
//! wins. Ladders are not assumed to be sorted, and the tier with the nearest
//! threshold is not preferred over a better-paying lower one.

use rust_decimal::Decimal;

use crate::models::BonusTier;

/// The outcome of resolving a measure against a bonus ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierResolution {
    /// The bonus paid; zero when no tier qualifies.
    pub bonus: Decimal,
    /// Position of the winning tier in the ladder as configured.
    pub tier_index: Option<usize>,
}

/// Resolves `measure` against an unordered bonus ladder.
///
/// A tier qualifies when `measure >= minimum`. The winning tier is the
/// qualifying one with the largest bonus; on equal bonuses the tier listed
/// first wins. Negative minimums and bonuses are treated as zero.
///
/// # Examples
///
/// ```
/// use shift_payroll::calculation::resolve_tier;
/// use shift_payroll::models::BonusTier;
/// use rust_decimal::Decimal;
///
/// let tiers = vec![
///     BonusTier::new(0, Decimal::from(5)),
///     BonusTier::new(100, Decimal::from(50)),
///     BonusTier::new(50, Decimal::from(80)),
/// ];
///
/// let resolution = resolve_tier(60, &tiers);
/// assert_eq!(resolution.bonus, Decimal::from(80));
/// assert_eq!(resolution.tier_index, Some(2));
/// ```
pub fn resolve_tier(measure: i64, tiers: &[BonusTier]) -> TierResolution {
    let mut best = TierResolution {
        bonus: Decimal::ZERO,
        tier_index: None,
    };

    for (index, tier) in tiers.iter().enumerate() {
        let minimum = tier.minimum.max(0);
        let bonus = tier.bonus.max(Decimal::ZERO);

        if measure >= minimum && bonus > best.bonus {
            best = TierResolution {
                bonus,
                tier_index: Some(index),
            };
        }
    }

    best
}
