//! Core data models for the work-hours ledger engine.
//!
//! This module contains all the domain models used throughout the engine.

mod entry;
mod settings;
mod totals;

pub use entry::Entry;
pub use settings::Settings;
pub use totals::{DayTotals, MonthStats, PeriodTotals};
