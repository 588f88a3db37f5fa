//! Calendar oracle: holiday computation and day classification.
//!
//! This module computes the movable and fixed public holidays for a year and
//! classifies any date as weekend, holiday, or workday. All classification is
//! calendar-day based; no time-of-day or timezone is involved.

mod easter;
mod holidays;

pub use easter::easter_sunday;
pub use holidays::{holiday_set, is_holiday, is_weekend, is_workday};
