//! Shift payroll engine for small retail branches
//!
//! This crate turns per-worker daily sales logs into monthly pay statements:
//! a daily base wage, per-cup commission, tiered daily attendance and weekly
//! volume bonuses, and itemized deductions, with an audit trace of every step.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
