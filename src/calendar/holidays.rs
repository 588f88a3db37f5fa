//! Latvian public holidays and workday classification.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};

use super::easter_sunday;

/// Computes the set of Latvian public holidays for a given year.
///
/// Deterministic, pure function of the year. The set always contains exactly
/// 13 dates: the three Easter-derived holidays (Good Friday, Easter Sunday,
/// Easter Monday) plus ten fixed-date national holidays.
///
/// # Example
///
/// ```
/// use worklog_engine::calendar::holiday_set;
/// use chrono::NaiveDate;
///
/// let holidays = holiday_set(2025);
/// assert_eq!(holidays.len(), 13);
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
/// assert!(holidays.contains(&NaiveDate::from_ymd_opt(2025, 4, 20).unwrap())); // Easter
/// ```
pub fn holiday_set(year: i32) -> BTreeSet<NaiveDate> {
    let easter = easter_sunday(year);
    let fixed = [
        (1, 1),   // New Year's Day
        (5, 1),   // Labour Day
        (5, 4),   // Restoration of Independence Day
        (6, 23),  // Midsummer Eve
        (6, 24),  // Midsummer Day
        (11, 18), // Proclamation Day
        (12, 24), // Christmas Eve
        (12, 25), // Christmas Day
        (12, 26), // Second Day of Christmas
        (12, 31), // New Year's Eve
    ];

    let mut set = BTreeSet::new();
    set.insert(easter - chrono::Duration::days(2)); // Good Friday
    set.insert(easter);
    set.insert(easter + chrono::Duration::days(1)); // Easter Monday
    for (month, day) in fixed {
        // Fixed month/day pairs are valid in every year.
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            set.insert(date);
        }
    }
    set
}

/// Returns whether the date is a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use worklog_engine::calendar::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2025-06-07 is a Saturday
/// assert!(is_weekend(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
/// // 2025-06-02 is a Monday
/// assert!(!is_weekend(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns whether the date is a public holiday in its year.
pub fn is_holiday(date: NaiveDate) -> bool {
    holiday_set(date.year()).contains(&date)
}

/// Returns whether the date is a workday: Monday through Friday AND not a
/// public holiday.
///
/// A weekday that is also a holiday is NOT a workday; weekends are never
/// workdays.
///
/// # Example
///
/// ```
/// use worklog_engine::calendar::is_workday;
/// use chrono::NaiveDate;
///
/// // 2025-06-02 is an ordinary Monday
/// assert!(is_workday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
/// // 2025-05-01 is a Thursday but also Labour Day
/// assert!(!is_workday(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()));
/// ```
pub fn is_workday(date: NaiveDate) -> bool {
    !is_weekend(date) && !is_holiday(date)
}
