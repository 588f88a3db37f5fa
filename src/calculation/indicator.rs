//! Day display indicator classification.
//!
//! Derived policy used by week/day views to color a day card. Pure function
//! of [`DayTotals`], decoupled from any rendering so it can be tested
//! directly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::DayTotals;

use super::workdays::STANDARD_DAY_HOURS;

/// How a day compares to the 8-hour standard, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayIndicator {
    /// No hours logged.
    Neutral,
    /// Hours logged on a weekend or holiday; all of them count as overtime.
    Overtime,
    /// Workday with fewer hours than the standard day.
    Under,
    /// Workday with exactly the standard day's hours.
    Met,
    /// Workday with more hours than the standard day.
    Over,
}

impl std::fmt::Display for DayIndicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayIndicator::Neutral => write!(f, "neutral"),
            DayIndicator::Overtime => write!(f, "overtime"),
            DayIndicator::Under => write!(f, "under"),
            DayIndicator::Met => write!(f, "met"),
            DayIndicator::Over => write!(f, "over"),
        }
    }
}

/// Classifies a day's totals for display.
///
/// Priority order: no hours is neutral; a weekend or holiday with hours is
/// overtime; a workday is under, met, or over relative to the 8-hour
/// standard day. `Decimal` comparison is exact, so "met" needs no epsilon.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::{DayIndicator, classify_day, day_totals};
/// use worklog_engine::models::{Entry, Settings};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // An empty Monday is neutral
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let totals = day_totals(&[], date, &Settings::default());
/// assert_eq!(classify_day(&totals), DayIndicator::Neutral);
/// ```
pub fn classify_day(totals: &DayTotals) -> DayIndicator {
    if totals.h_day == Decimal::ZERO {
        DayIndicator::Neutral
    } else if totals.weekend || totals.holiday {
        DayIndicator::Overtime
    } else if totals.workday {
        if totals.h_day < STANDARD_DAY_HOURS {
            DayIndicator::Under
        } else if totals.h_day == STANDARD_DAY_HOURS {
            DayIndicator::Met
        } else {
            DayIndicator::Over
        }
    } else {
        DayIndicator::Overtime
    }
}
