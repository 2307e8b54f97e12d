//! Per-worker entry ledger.
//!
//! A [`WorkerLedger`] holds one worker's daily entries keyed by date, so
//! re-submitting a day replaces the earlier record instead of adding a
//! second one.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{DailyEntry, PayPeriod};

/// One worker's daily entries, at most one per calendar date.
///
/// # Example
///
/// ```
/// use shift_payroll::models::{DailyEntry, WorkerLedger};
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let mut ledger = WorkerLedger::new("budi");
///
/// ledger.upsert(DailyEntry::new(day, 40, 30));
/// let replaced = ledger.upsert(DailyEntry::new(day, 45, 32));
///
/// assert_eq!(replaced.map(|e| e.total_cups), Some(40));
/// assert_eq!(ledger.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerLedger {
    worker: String,
    entries: BTreeMap<NaiveDate, DailyEntry>,
}

impl WorkerLedger {
    /// Creates an empty ledger for the named worker.
    pub fn new(worker: impl Into<String>) -> Self {
        Self {
            worker: worker.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Builds a ledger from a list of entries. Later entries replace earlier
    /// ones with the same date.
    pub fn from_entries(
        worker: impl Into<String>,
        entries: impl IntoIterator<Item = DailyEntry>,
    ) -> Self {
        let mut ledger = Self::new(worker);
        for entry in entries {
            ledger.upsert(entry);
        }
        ledger
    }

    /// The worker this ledger belongs to.
    pub fn worker(&self) -> &str {
        &self.worker
    }

    /// Inserts an entry, returning the entry it replaced for the same date.
    pub fn upsert(&mut self, entry: DailyEntry) -> Option<DailyEntry> {
        self.entries.insert(entry.date, entry)
    }

    /// Removes the entry for `date`, if any.
    pub fn remove(&mut self, date: NaiveDate) -> Option<DailyEntry> {
        self.entries.remove(&date)
    }

    /// The entry for `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries.get(&date)
    }

    /// Number of days recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no day is recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in ascending date order.
    pub fn entries(&self) -> impl Iterator<Item = &DailyEntry> {
        self.entries.values()
    }

    /// Entries whose date falls inside `period`, in ascending date order.
    pub fn entries_in(&self, period: &PayPeriod) -> Vec<DailyEntry> {
        // A period built by hand with reversed bounds holds no days.
        if period.end_date < period.start_date {
            return Vec::new();
        }
        self.entries
            .range(period.start_date..=period.end_date)
            .map(|(_, entry)| entry.clone())
            .collect()
    }
}
