//! Day-level aggregation: classification, hour split, and money allocation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::calendar::{is_holiday, is_weekend, is_workday};
use crate::models::{DayTotals, Entry, Settings};

use super::hour_split::split_hours;
use super::rates::{resolve_rates, resolve_threshold};

/// Computes the totals for one calendar date.
///
/// Filters `entries` to the given date, sums the hours, classifies the date
/// via the calendar oracle, splits normal/overtime hours, and allocates gross
/// pay proportionally across the day's entries using their snapshot rates.
///
/// # Hour split policy (first match wins)
///
/// 1. Weekend or holiday with hours logged: everything is overtime,
///    regardless of threshold.
/// 2. Workday: up to the threshold is normal, the rest is overtime. The
///    threshold comes from the first entry's snapshot, falling back to the
///    settings.
/// 3. Anything else: everything is overtime. Unreachable given the
///    classification rules (a non-workday weekday is always a holiday, which
///    case 1 already covers), kept so a future classification change cannot
///    silently drop hours.
///
/// # Money allocation
///
/// Each entry receives a share of the day's normal/overtime split in
/// proportion to its hours (`entry.hours / h_day`), then contributes
/// `normal_part * rate + over_part * rate_over` on workdays, or the entire
/// overtime share at the weekend rate on weekends/holidays. Splitting the
/// threshold per-entry instead would double-count it when several entries
/// share a day.
///
/// # Defensive behavior
///
/// The engine never fails on malformed numeric input: negative hours on a
/// corrupted entry are treated as zero during aggregation. A day with no
/// entries returns zero hours and money but still carries its classification
/// flags.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::day_totals;
/// use worklog_engine::models::{Entry, Settings};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 2025-06-02 is a Monday
/// let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
/// let entry = Entry {
///     id: "e_001".to_string(),
///     date,
///     hours: Decimal::from(10),
///     activity: None,
///     rate: Some(Decimal::from(8)),
///     rate_over: Some(Decimal::from(12)),
///     rate_weekend: None,
///     threshold: Some(Decimal::from(8)),
/// };
///
/// let totals = day_totals(&[entry], date, &Settings::default());
/// assert_eq!(totals.normal, Decimal::from(8));
/// assert_eq!(totals.over, Decimal::from(2));
/// assert_eq!(totals.amount, Decimal::from(88)); // 8*8 + 2*12
/// ```
pub fn day_totals(entries: &[Entry], date: NaiveDate, settings: &Settings) -> DayTotals {
    let rows: Vec<&Entry> = entries.iter().filter(|e| e.date == date).collect();

    let h_day: Decimal = rows
        .iter()
        .map(|e| e.hours.max(Decimal::ZERO))
        .sum();
    let threshold = resolve_threshold(&rows, settings);

    let weekend = is_weekend(date);
    let holiday = is_holiday(date);
    let workday = is_workday(date);

    let (normal, over) = if (weekend || holiday) && h_day > Decimal::ZERO {
        (Decimal::ZERO, h_day)
    } else if workday {
        let split = split_hours(h_day, threshold);
        (split.normal, split.over)
    } else {
        (Decimal::ZERO, h_day)
    };

    let mut amount = Decimal::ZERO;
    for row in &rows {
        let hours = row.hours.max(Decimal::ZERO);
        let share = if h_day > Decimal::ZERO {
            hours / h_day
        } else {
            Decimal::ZERO
        };
        let normal_part = normal * share;
        let over_part = over * share;
        let rates = resolve_rates(row, settings);

        if weekend || holiday {
            amount += over_part * rates.rate_weekend;
        } else if workday {
            amount += normal_part * rates.rate + over_part * rates.rate_over;
        } else {
            amount += over_part * rates.rate_weekend;
        }
    }

    DayTotals {
        date,
        weekend,
        holiday,
        workday,
        h_day,
        normal,
        over,
        threshold,
        amount,
    }
}
