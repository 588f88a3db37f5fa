//! Per-entry rate and threshold resolution.
//!
//! Every place the engine needs an effective rate goes through this module,
//! so the fallback behavior cannot diverge between display and calculation
//! code paths. The chains are:
//!
//! - `rate`: entry snapshot, else settings rate
//! - `rate_over`: entry snapshot, else settings overtime rate, else `rate`
//! - `rate_weekend`: entry snapshot, else settings weekend rate, else `rate_over`
//! - `threshold`: first entry snapshot, else settings threshold

use rust_decimal::Decimal;

use crate::models::{Entry, Settings};

/// The three effective hourly rates for one entry after fallback resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRates {
    /// Effective normal hourly rate.
    pub rate: Decimal,
    /// Effective overtime hourly rate.
    pub rate_over: Decimal,
    /// Effective weekend/holiday hourly rate.
    pub rate_weekend: Decimal,
}

/// Resolves the effective rates for an entry against the given settings.
///
/// # Example
///
/// ```
/// use worklog_engine::calculation::resolve_rates;
/// use worklog_engine::models::{Entry, Settings};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// let entry = Entry {
///     id: "e_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     hours: Decimal::from(8),
///     activity: None,
///     rate: Some(Decimal::from(10)),
///     rate_over: None,
///     rate_weekend: None,
///     threshold: None,
/// };
///
/// let rates = resolve_rates(&entry, &settings);
/// assert_eq!(rates.rate, Decimal::from(10));
/// // No overtime snapshot and no settings override: falls back to the
/// // entry's own normal rate.
/// assert_eq!(rates.rate_over, Decimal::from(10));
/// assert_eq!(rates.rate_weekend, Decimal::from(10));
/// ```
pub fn resolve_rates(entry: &Entry, settings: &Settings) -> ResolvedRates {
    let rate = entry.rate.unwrap_or(settings.rate);
    let rate_over = entry.rate_over.or(settings.rate_over).unwrap_or(rate);
    let rate_weekend = entry
        .rate_weekend
        .or(settings.rate_weekend)
        .unwrap_or(rate_over);
    ResolvedRates {
        rate,
        rate_over,
        rate_weekend,
    }
}

/// Resolves the daily overtime threshold for a day's entries.
///
/// Takes the snapshot of the first entry when present, otherwise the settings
/// threshold. Callers pass entries in a deterministic order (the repository
/// lists them sorted by date then id).
pub fn resolve_threshold(entries: &[&Entry], settings: &Settings) -> Decimal {
    entries
        .first()
        .and_then(|e| e.threshold)
        .unwrap_or(settings.threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn entry_with_rates(
        rate: Option<&str>,
        rate_over: Option<&str>,
        rate_weekend: Option<&str>,
    ) -> Entry {
        Entry {
            id: "e_001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            hours: dec("8"),
            activity: None,
            rate: rate.map(dec),
            rate_over: rate_over.map(dec),
            rate_weekend: rate_weekend.map(dec),
            threshold: None,
        }
    }

    fn settings_with(rate: &str, rate_over: Option<&str>, rate_weekend: Option<&str>) -> Settings {
        Settings {
            rate: dec(rate),
            rate_over: rate_over.map(dec),
            rate_weekend: rate_weekend.map(dec),
            threshold: dec("8"),
        }
    }

    #[test]
    fn test_entry_snapshots_win_over_settings() {
        let entry = entry_with_rates(Some("8"), Some("12"), Some("16"));
        let settings = settings_with("10", Some("20"), Some("30"));
        let rates = resolve_rates(&entry, &settings);
        assert_eq!(rates.rate, dec("8"));
        assert_eq!(rates.rate_over, dec("12"));
        assert_eq!(rates.rate_weekend, dec("16"));
    }

    #[test]
    fn test_settings_fill_missing_snapshots() {
        let entry = entry_with_rates(None, None, None);
        let settings = settings_with("10", Some("20"), Some("30"));
        let rates = resolve_rates(&entry, &settings);
        assert_eq!(rates.rate, dec("10"));
        assert_eq!(rates.rate_over, dec("20"));
        assert_eq!(rates.rate_weekend, dec("30"));
    }

    #[test]
    fn test_rate_over_falls_back_to_resolved_rate() {
        let entry = entry_with_rates(Some("9"), None, None);
        let settings = settings_with("10", None, None);
        let rates = resolve_rates(&entry, &settings);
        assert_eq!(rates.rate_over, dec("9"));
    }

    #[test]
    fn test_rate_weekend_falls_back_through_rate_over() {
        let entry = entry_with_rates(None, Some("12"), None);
        let settings = settings_with("10", None, None);
        let rates = resolve_rates(&entry, &settings);
        assert_eq!(rates.rate_weekend, dec("12"));
    }

    #[test]
    fn test_rate_weekend_full_chain_to_rate() {
        let entry = entry_with_rates(None, None, None);
        let settings = settings_with("10", None, None);
        let rates = resolve_rates(&entry, &settings);
        assert_eq!(rates.rate, dec("10"));
        assert_eq!(rates.rate_over, dec("10"));
        assert_eq!(rates.rate_weekend, dec("10"));
    }

    #[test]
    fn test_resolve_threshold_uses_first_entry_snapshot() {
        let mut first = entry_with_rates(None, None, None);
        first.threshold = Some(dec("7"));
        let second = entry_with_rates(None, None, None);
        let settings = settings_with("10", None, None);
        let entries = vec![&first, &second];
        assert_eq!(resolve_threshold(&entries, &settings), dec("7"));
    }

    #[test]
    fn test_resolve_threshold_falls_back_to_settings() {
        let entry = entry_with_rates(None, None, None);
        let settings = settings_with("10", None, None);
        let entries = vec![&entry];
        assert_eq!(resolve_threshold(&entries, &settings), dec("8"));
    }

    #[test]
    fn test_resolve_threshold_empty_day() {
        let settings = settings_with("10", None, None);
        assert_eq!(resolve_threshold(&[], &settings), dec("8"));
    }
}
