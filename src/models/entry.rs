//! Entry model for logged work hours.
//!
//! This module defines the [`Entry`] struct, an immutable-once-created record
//! of hours worked on one calendar date, carrying rate snapshots taken from
//! the settings in effect at creation time.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A record of hours worked on one calendar date.
///
/// The rate fields are snapshots captured from [`Settings`](crate::models::Settings)
/// when the entry is created, not live lookups, so later rate changes never
/// retroactively alter past pay calculations. A `None` snapshot falls back to
/// the settings value during aggregation (see
/// [`resolve_rates`](crate::calculation::resolve_rates)).
///
/// # Example
///
/// ```
/// use worklog_engine::models::Entry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = Entry {
///     id: "e_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     hours: Decimal::new(80, 1), // 8.0 hours
///     activity: Some("maintenance".to_string()),
///     rate: Some(Decimal::new(795, 2)),
///     rate_over: None,
///     rate_weekend: None,
///     threshold: Some(Decimal::from(8)),
/// };
/// assert_eq!(entry.hours, Decimal::new(80, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique identifier, assigned at creation, never reused.
    pub id: String,
    /// The calendar date the hours were worked (local calendar day, no time component).
    pub date: NaiveDate,
    /// Hours worked on that date.
    pub hours: Decimal,
    /// Optional free-text activity label.
    #[serde(default)]
    pub activity: Option<String>,
    /// Snapshot of the normal hourly rate at creation time.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Snapshot of the overtime hourly rate at creation time.
    #[serde(default)]
    pub rate_over: Option<Decimal>,
    /// Snapshot of the weekend/holiday hourly rate at creation time.
    #[serde(default)]
    pub rate_weekend: Option<Decimal>,
    /// Snapshot of the daily overtime threshold at creation time.
    #[serde(default)]
    pub threshold: Option<Decimal>,
}
