//! Month-level workday counts and required-hours projections.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::calendar::is_workday;
use crate::models::MonthStats;

/// Hours in a standard working day, used for required-hours projections.
///
/// Deliberately independent of the configurable overtime threshold: the
/// monthly requirement is always counted at 8 hours per workday.
pub const STANDARD_DAY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Returns the first day of a month, or `None` for an invalid year/month.
fn month_start(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Returns the last day of a month, or `None` for an invalid year/month.
fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month_start.and_then(|d| d.checked_sub_days(Days::new(1)))
}

/// Counts workdays between two dates, inclusive.
fn count_workdays(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| is_workday(*d))
        .count() as u32
}

/// Counts the workdays in a calendar month.
///
/// `month` is 1-based (January = 1). Returns 0 for an invalid year/month
/// rather than failing; the engine is total over its input domain.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::count_workdays_in_month;
///
/// // January 2025: 23 weekdays minus New Year's Day
/// assert_eq!(count_workdays_in_month(2025, 1), 22);
/// ```
pub fn count_workdays_in_month(year: i32, month: u32) -> u32 {
    match (month_start(year, month), month_end(year, month)) {
        (Some(start), Some(end)) => count_workdays(start, end),
        _ => 0,
    }
}

/// Counts the workdays remaining in a month from a reference date.
///
/// Returns 0 when `(year, month)` is not the month `as_of` falls in;
/// otherwise counts workdays from `as_of` (inclusive) through month end.
/// The reference date is an explicit parameter so the function stays
/// deterministic; the production caller supplies today's date.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::remaining_workdays;
/// use chrono::NaiveDate;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap(); // Tuesday
/// // Jan 28-31, 2025 contains four weekdays, none of them holidays
/// assert_eq!(remaining_workdays(as_of, 2025, 1), 4);
/// // Querying a different month yields zero
/// assert_eq!(remaining_workdays(as_of, 2025, 2), 0);
/// ```
pub fn remaining_workdays(as_of: NaiveDate, year: i32, month: u32) -> u32 {
    if as_of.year() != year || as_of.month() != month {
        return 0;
    }
    match month_end(year, month) {
        Some(end) => count_workdays(as_of, end),
        None => 0,
    }
}

/// Required hours for a number of workdays at the 8-hour standard day.
pub fn required_hours(workdays: u32) -> Decimal {
    Decimal::from(workdays) * STANDARD_DAY_HOURS
}

/// Computes the month statistics used by planning views.
///
/// Bundles the workday count, the monthly hour requirement, and the
/// remaining-workday projection relative to `as_of`.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::month_stats;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let as_of = NaiveDate::from_ymd_opt(2025, 1, 28).unwrap();
/// let stats = month_stats(2025, 1, as_of);
/// assert_eq!(stats.workdays, 22);
/// assert_eq!(stats.required_hours, Decimal::from(176));
/// assert_eq!(stats.remaining_workdays, 4);
/// assert_eq!(stats.remaining_hours, Decimal::from(32));
/// ```
pub fn month_stats(year: i32, month: u32, as_of: NaiveDate) -> MonthStats {
    let workdays = count_workdays_in_month(year, month);
    let remaining = remaining_workdays(as_of, year, month);
    MonthStats {
        workdays,
        required_hours: required_hours(workdays),
        remaining_workdays: remaining,
        remaining_hours: required_hours(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_january_2025_excludes_new_year_and_weekends() {
        // Jan 2025 has 23 weekdays; Jan 1 (Wednesday) is a holiday.
        assert_eq!(count_workdays_in_month(2025, 1), 22);
    }

    #[test]
    fn test_june_2025_excludes_midsummer() {
        // June 2025 has 21 weekdays; Jun 23 (Mon) and Jun 24 (Tue) are
        // holidays.
        assert_eq!(count_workdays_in_month(2025, 6), 19);
    }

    #[test]
    fn test_month_without_holidays() {
        // No fixed or movable holiday lands in any weekday of Jul 2025.
        assert_eq!(count_workdays_in_month(2025, 7), 23);
    }

    #[test]
    fn test_december_rollover() {
        // Dec 2025 has 23 weekdays; Dec 24 (Wed), 25 (Thu), 26 (Fri) and
        // 31 (Wed) are holidays.
        assert_eq!(count_workdays_in_month(2025, 12), 19);
    }

    #[test]
    fn test_invalid_month_counts_zero() {
        assert_eq!(count_workdays_in_month(2025, 0), 0);
        assert_eq!(count_workdays_in_month(2025, 13), 0);
    }

    #[test]
    fn test_remaining_workdays_mid_month() {
        // Tue Jan 28 .. Fri Jan 31, 2025: four workdays
        assert_eq!(remaining_workdays(date(2025, 1, 28), 2025, 1), 4);
    }

    #[test]
    fn test_remaining_workdays_includes_as_of_day() {
        // Fri Jan 31 alone
        assert_eq!(remaining_workdays(date(2025, 1, 31), 2025, 1), 1);
    }

    #[test]
    fn test_remaining_workdays_weekend_as_of() {
        // Sat Jan 25: remaining workdays are Mon 27 .. Fri 31
        assert_eq!(remaining_workdays(date(2025, 1, 25), 2025, 1), 5);
    }

    #[test]
    fn test_remaining_workdays_zero_outside_current_month() {
        let as_of = date(2025, 1, 28);
        assert_eq!(remaining_workdays(as_of, 2025, 2), 0);
        assert_eq!(remaining_workdays(as_of, 2024, 1), 0);
    }

    #[test]
    fn test_remaining_workdays_first_of_month_equals_full_count() {
        assert_eq!(
            remaining_workdays(date(2025, 7, 1), 2025, 7),
            count_workdays_in_month(2025, 7)
        );
    }

    #[test]
    fn test_required_hours_uses_8_hour_day() {
        assert_eq!(required_hours(22), Decimal::from(176));
        assert_eq!(required_hours(0), Decimal::ZERO);
    }

    #[test]
    fn test_month_stats_january_2025() {
        let stats = month_stats(2025, 1, date(2025, 1, 28));
        assert_eq!(stats.workdays, 22);
        assert_eq!(stats.required_hours, Decimal::from(176));
        assert_eq!(stats.remaining_workdays, 4);
        assert_eq!(stats.remaining_hours, Decimal::from(32));
    }

    #[test]
    fn test_month_stats_for_other_month_has_zero_remaining() {
        let stats = month_stats(2025, 3, date(2025, 1, 28));
        assert!(stats.workdays > 0);
        assert_eq!(stats.remaining_workdays, 0);
        assert_eq!(stats.remaining_hours, Decimal::ZERO);
    }

    #[test]
    fn test_february_leap_year() {
        // Feb 2024 (leap): 29 days, 21 weekdays, no holidays on weekdays.
        assert_eq!(count_workdays_in_month(2024, 2), 21);
    }
}
