//! Daily production entry model.
//!
//! A [`DailyEntry`] records one worker's sales and deductions for one
//! calendar day.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::capped::capped_sum;

use super::lenient;

/// One worker's production and deductions for a single calendar day.
///
/// Counts are kept signed so that a negative value typed upstream survives
/// deserialization; the payroll engine clamps every numeric field to zero
/// before using it.
///
/// # Example
///
/// ```
/// use shift_payroll::models::DailyEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = DailyEntry::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 80, 60)
///     .with_deductions(Decimal::from(20000), Decimal::ZERO, Decimal::from(5000));
///
/// assert_eq!(entry.total_cups, 80);
/// assert_eq!(entry.total_deductions(), Decimal::from(25000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The calendar day worked. Also the entry's natural key per worker.
    pub date: NaiveDate,
    /// Total cups sold that day.
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_cups: i64,
    /// Non-SKS cups sold that day; the basis for per-cup commission.
    #[serde(default, deserialize_with = "lenient::count")]
    pub non_sks_cups: i64,
    /// Cash advance (kasbon) taken against wages.
    #[serde(default, deserialize_with = "lenient::money")]
    pub cash_advance: Decimal,
    /// Cash register shortage charged to the worker.
    #[serde(default, deserialize_with = "lenient::money")]
    pub shortfall: Decimal,
    /// Expired or spoiled stock charged to the worker.
    #[serde(default, deserialize_with = "lenient::money")]
    pub expired_loss: Decimal,
}

impl DailyEntry {
    /// Creates an entry with the given cup counts and no deductions.
    pub fn new(date: NaiveDate, total_cups: i64, non_sks_cups: i64) -> Self {
        Self {
            date,
            total_cups,
            non_sks_cups,
            cash_advance: Decimal::ZERO,
            shortfall: Decimal::ZERO,
            expired_loss: Decimal::ZERO,
        }
    }

    /// Sets the three deduction amounts.
    pub fn with_deductions(
        mut self,
        cash_advance: Decimal,
        shortfall: Decimal,
        expired_loss: Decimal,
    ) -> Self {
        self.cash_advance = cash_advance;
        self.shortfall = shortfall;
        self.expired_loss = expired_loss;
        self
    }

    /// Sum of the deductions after clamping each to non-negative, held at
    /// `Decimal::MAX` if it does not fit.
    pub fn total_deductions(&self) -> Decimal {
        capped_sum(
            [self.cash_advance, self.shortfall, self.expired_loss]
                .into_iter()
                .map(|d| d.max(Decimal::ZERO)),
        )
    }
}
