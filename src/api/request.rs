//! Query parameter types for the report endpoints.
//!
//! The mutation endpoints deserialize the repository's own
//! [`NewEntry`](crate::repository::NewEntry) and
//! [`EntryPatch`](crate::repository::EntryPatch) types directly.

use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for `GET /reports/period`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodQuery {
    /// Start of the range (inclusive), `YYYY-MM-DD`.
    pub start: NaiveDate,
    /// End of the range (inclusive), `YYYY-MM-DD`.
    pub end: NaiveDate,
}

/// Query parameters for `GET /reports/month/{year}/{month}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthQuery {
    /// Reference date for the remaining-workdays projection. Defaults to
    /// today's local date when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}
