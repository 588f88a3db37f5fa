//! Gregorian Easter computation.

use chrono::NaiveDate;

/// Computes the date of Easter Sunday for a given year.
///
/// Uses the Meeus/Jones/Butcher algorithm, a pure integer computation valid
/// for any Gregorian year. The century-correction terms (`f`, `g` below) are
/// part of the algorithm; simplified formulas that omit them drift from the
/// correct date from around 2100 onward.
///
/// # Arguments
///
/// * `year` - The Gregorian year (must form a valid `NaiveDate`, i.e. within
///   chrono's supported range)
///
/// # Returns
///
/// The date of Easter Sunday, always between March 22 and April 25 inclusive.
///
/// # Example
///
/// ```
/// use worklog_engine::calendar::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     easter_sunday(2025),
///     NaiveDate::from_ymd_opt(2025, 4, 20).unwrap()
/// );
/// ```
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31; // 3 = March, 4 = April
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    // The algorithm only ever yields March 22 through April 25, so the
    // conversion cannot fail for any year chrono can represent.
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .unwrap_or_else(|| panic!("Easter computation produced invalid date for year {year}"))
}
