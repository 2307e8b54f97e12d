//! Calculation logic for the payroll engine.
//!
//! This module contains the pure functions that turn daily entries into pay:
//! week-key derivation and entry date parsing, bonus tier resolution,
//! per-cup commission, and the payroll fold that combines them.

pub(crate) mod capped;
mod commission;
mod payroll;
mod tier_resolution;
mod week_key;

pub use commission::{CommissionResult, calculate_commission};
pub use payroll::compute_payroll;
pub use tier_resolution::{TierResolution, resolve_tier};
pub use week_key::{parse_entry_date, week_key_of};
