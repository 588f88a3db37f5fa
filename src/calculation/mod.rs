//! Aggregation logic for the work-hours ledger engine.
//!
//! This module contains the hour-splitting policy, per-entry rate resolution,
//! the day aggregator with proportional money allocation, period summation,
//! month-level workday statistics, and the day display indicator.

mod day_totals;
mod hour_split;
mod indicator;
mod period;
mod rates;
mod workdays;

pub use day_totals::day_totals;
pub use hour_split::{DEFAULT_OVERTIME_THRESHOLD, HourSplit, split_hours};
pub use indicator::{DayIndicator, classify_day};
pub use period::sum_period;
pub use rates::{ResolvedRates, resolve_rates, resolve_threshold};
pub use workdays::{
    STANDARD_DAY_HOURS, count_workdays_in_month, month_stats, remaining_workdays, required_hours,
};
