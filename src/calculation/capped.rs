//! Overflow-capped money arithmetic.
//!
//! Every amount the engine handles is clamped to non-negative first, so the
//! only way an operation can fail is by exceeding `Decimal::MAX`. Such results
//! are held at `Decimal::MAX` and the overflow is remembered so the run can
//! report it.

use rust_decimal::Decimal;

/// Tracks whether any capped operation hit the ceiling.
#[derive(Debug, Default)]
pub(crate) struct CappedMath {
    overflowed: bool,
}

impl CappedMath {
    /// `a + b`, or `Decimal::MAX` when the sum does not fit.
    pub(crate) fn add(&mut self, a: Decimal, b: Decimal) -> Decimal {
        a.checked_add(b).unwrap_or_else(|| self.cap())
    }

    /// Adds `amount` into `total` in place.
    pub(crate) fn accumulate(&mut self, total: &mut Decimal, amount: Decimal) {
        *total = self.add(*total, amount);
    }

    /// `a * b`, or `Decimal::MAX` when the product does not fit.
    pub(crate) fn mul(&mut self, a: Decimal, b: Decimal) -> Decimal {
        a.checked_mul(b).unwrap_or_else(|| self.cap())
    }

    /// Whether any operation so far was capped.
    pub(crate) fn overflowed(&self) -> bool {
        self.overflowed
    }

    fn cap(&mut self) -> Decimal {
        self.overflowed = true;
        Decimal::MAX
    }
}

/// Sums non-negative amounts, holding at `Decimal::MAX` on overflow.
pub(crate) fn capped_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts
        .into_iter()
        .fold(Decimal::ZERO, |total, amount| {
            total.checked_add(amount).unwrap_or(Decimal::MAX)
        })
}
