//! Derived totals returned by the aggregation functions.
//!
//! None of these types are persisted; they are computed on demand from
//! entries plus settings and are suitable for direct JSON serialization.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals and classification for a single calendar date.
///
/// Computed by [`day_totals`](crate::calculation::day_totals). A day with no
/// entries still carries its classification flags; all hour and money fields
/// are then zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    /// The date these totals describe.
    pub date: NaiveDate,
    /// Whether the date is a Saturday or Sunday.
    pub weekend: bool,
    /// Whether the date is a public holiday.
    pub holiday: bool,
    /// Whether the date is a workday (Monday-Friday and not a holiday).
    pub workday: bool,
    /// Total raw hours logged on the date.
    pub h_day: Decimal,
    /// Hours counted as normal (within the daily threshold).
    pub normal: Decimal,
    /// Hours counted as overtime.
    pub over: Decimal,
    /// The overtime threshold that was applied.
    pub threshold: Decimal,
    /// Gross pay for the date under the per-entry snapshot rates.
    pub amount: Decimal,
}

/// Aggregate totals across all dates in an inclusive range.
///
/// Computed by [`sum_period`](crate::calculation::sum_period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Total raw hours across the range.
    pub total: Decimal,
    /// Total normal hours across the range.
    pub normal: Decimal,
    /// Total overtime hours across the range.
    pub over: Decimal,
    /// Total gross pay across the range.
    pub amount: Decimal,
}

impl PeriodTotals {
    /// Returns all-zero totals, the identity for period summation.
    pub fn zero() -> Self {
        Self {
            total: Decimal::ZERO,
            normal: Decimal::ZERO,
            over: Decimal::ZERO,
            amount: Decimal::ZERO,
        }
    }
}

/// Workday counts and required-hours projections for one calendar month.
///
/// Computed by [`month_stats`](crate::calculation::month_stats). The
/// remaining-workday fields are relative to an explicit reference date and
/// are zero when that date falls outside the queried month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthStats {
    /// Number of workdays in the month.
    pub workdays: u32,
    /// Required hours for the month (workdays at the 8-hour standard day).
    pub required_hours: Decimal,
    /// Workdays remaining from the reference date through month end.
    pub remaining_workdays: u32,
    /// Required hours remaining from the reference date through month end.
    pub remaining_hours: Decimal,
}
