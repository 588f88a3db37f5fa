//! Period aggregation across a date range.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::models::{Entry, PeriodTotals, Settings};

use super::day_totals::day_totals;

/// Sums day totals across an inclusive date range.
///
/// Groups entries by date within `[start, end]` and invokes
/// [`day_totals`] once per distinct date that has at least one entry. Dates
/// with no entries contribute nothing; classification-only zero days are
/// never visited.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::sum_period;
/// use worklog_engine::models::{Entry, Settings};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2025-06-03 is a Tuesday
/// let entry = Entry {
///     id: "e_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
///     hours: Decimal::from(8),
///     activity: None,
///     rate: Some(Decimal::from(8)),
///     rate_over: None,
///     rate_weekend: None,
///     threshold: Some(Decimal::from(8)),
/// };
///
/// let totals = sum_period(
///     &[entry],
///     NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
///     &Settings::default(),
/// );
/// assert_eq!(totals.total, Decimal::from(8));
/// assert_eq!(totals.amount, Decimal::from(64));
/// ```
pub fn sum_period(
    entries: &[Entry],
    start: NaiveDate,
    end: NaiveDate,
    settings: &Settings,
) -> PeriodTotals {
    let dates: BTreeSet<NaiveDate> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .map(|e| e.date)
        .collect();

    let mut totals = PeriodTotals::zero();
    for date in dates {
        let day = day_totals(entries, date, settings);
        totals.total += day.h_day;
        totals.normal += day.normal;
        totals.over += day.over;
        totals.amount += day.amount;
    }
    totals
}
