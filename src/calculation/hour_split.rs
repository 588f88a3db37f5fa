//! Normal/overtime hour splitting.
//!
//! This module provides the pure splitting policy applied to a workday's
//! hours: everything up to the daily threshold is normal time, the rest is
//! overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default daily overtime threshold in hours.
pub const DEFAULT_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The split of a day's hours into normal and overtime portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourSplit {
    /// Hours within the daily threshold.
    pub normal: Decimal,
    /// Hours exceeding the daily threshold.
    pub over: Decimal,
}

/// Splits hours worked into normal and overtime portions.
///
/// `over = max(0, hours - threshold)` and `normal = max(0, hours - over)`,
/// so for non-negative inputs the two portions always sum back to the input.
/// Total function; never fails. A non-positive threshold degenerates to
/// all-overtime.
///
/// # Arguments
///
/// * `hours` - The total hours worked in the day
/// * `threshold` - The daily hour boundary before overtime starts
///
/// # Examples
///
/// ```
/// use worklog_engine::calculation::{DEFAULT_OVERTIME_THRESHOLD, split_hours};
/// use rust_decimal::Decimal;
///
/// let split = split_hours(Decimal::from(10), DEFAULT_OVERTIME_THRESHOLD);
/// assert_eq!(split.normal, Decimal::from(8));
/// assert_eq!(split.over, Decimal::from(2));
///
/// let split = split_hours(Decimal::from(6), DEFAULT_OVERTIME_THRESHOLD);
/// assert_eq!(split.normal, Decimal::from(6));
/// assert_eq!(split.over, Decimal::ZERO);
/// ```
pub fn split_hours(hours: Decimal, threshold: Decimal) -> HourSplit {
    let over = (hours - threshold).max(Decimal::ZERO);
    let normal = (hours - over).max(Decimal::ZERO);
    HourSplit { normal, over }
}
