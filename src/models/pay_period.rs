//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that bounds which daily
//! entries belong to a payroll run. Wages are normally reported per calendar
//! month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use shift_payroll::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let february = PayPeriod::month(2024, 2).unwrap();
///
/// assert_eq!(february.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(february.contains_date(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()));
/// assert!(!february.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first day of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Creates a period, rejecting one that ends before it starts.
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidPeriod {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// The calendar month `month` (1-12) of `year`.
    ///
    /// Returns `None` for a month outside 1-12.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_month_start = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        Some(Self {
            start_date,
            end_date: next_month_start.pred_opt()?,
        })
    }

    /// The calendar month containing `date`.
    pub fn month_of(date: NaiveDate) -> Option<Self> {
        Self::month(date.year(), date.month())
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
