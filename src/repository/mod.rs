//! In-memory entry repository.
//!
//! The engine itself only reads entry collections passed to it; this module
//! is the collaborator that owns them. It validates the caller-facing
//! contract (positive hours, positive rates, positive threshold) at the
//! create/update boundary and snapshots the current settings onto each new
//! entry so later settings changes never alter historical pay.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Entry, Settings};

/// Input for creating a new entry.
///
/// Rate and threshold fields left as `None` are snapshotted from the current
/// settings; explicit values override them but are still validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEntry {
    /// The calendar date the hours were worked.
    pub date: NaiveDate,
    /// Hours worked; must be positive.
    pub hours: Decimal,
    /// Optional free-text activity label.
    #[serde(default)]
    pub activity: Option<String>,
    /// Explicit normal-rate snapshot; defaults to the settings rate.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Explicit overtime-rate snapshot; defaults through the settings chain.
    #[serde(default)]
    pub rate_over: Option<Decimal>,
    /// Explicit weekend-rate snapshot; defaults through the settings chain.
    #[serde(default)]
    pub rate_weekend: Option<Decimal>,
    /// Explicit threshold snapshot; defaults to the settings threshold.
    #[serde(default)]
    pub threshold: Option<Decimal>,
}

/// A partial update to an existing entry.
///
/// Only the fields present are changed. The id, date, and threshold snapshot
/// of an entry never change after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryPatch {
    /// New hours value; must be positive.
    #[serde(default)]
    pub hours: Option<Decimal>,
    /// New activity label; an empty string clears it.
    #[serde(default)]
    pub activity: Option<String>,
    /// New normal-rate snapshot; must be positive.
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// New overtime-rate snapshot; must be positive.
    #[serde(default)]
    pub rate_over: Option<Decimal>,
    /// New weekend-rate snapshot; must be positive.
    #[serde(default)]
    pub rate_weekend: Option<Decimal>,
}

/// In-memory mapping from entry id to entry.
///
/// Ids are UUIDs assigned at creation and never reused. Listing is sorted by
/// date then id, so threshold resolution (which looks at a day's first
/// entry) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct EntryRepository {
    entries: HashMap<String, Entry>,
}

impl EntryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a new entry, snapshotting rates from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEntry`] when hours are not positive or
    /// any explicitly provided rate/threshold is not positive.
    pub fn create(&mut self, new: NewEntry, settings: &Settings) -> EngineResult<Entry> {
        validate_positive("hours", new.hours)?;
        validate_optional_positive("rate", new.rate)?;
        validate_optional_positive("rate_over", new.rate_over)?;
        validate_optional_positive("rate_weekend", new.rate_weekend)?;
        validate_optional_positive("threshold", new.threshold)?;

        let rate = new.rate.unwrap_or(settings.rate);
        let rate_over = new.rate_over.unwrap_or_else(|| settings.effective_rate_over());
        let rate_weekend = new
            .rate_weekend
            .unwrap_or_else(|| settings.effective_rate_weekend());
        let threshold = new.threshold.unwrap_or(settings.threshold);

        let entry = Entry {
            id: Uuid::new_v4().to_string(),
            date: new.date,
            hours: new.hours,
            activity: normalize_activity(new.activity),
            rate: Some(rate),
            rate_over: Some(rate_over),
            rate_weekend: Some(rate_weekend),
            threshold: Some(threshold),
        };
        self.entries.insert(entry.id.clone(), entry.clone());
        Ok(entry)
    }

    /// Returns the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EntryNotFound`] when no entry has that id.
    pub fn get(&self, id: &str) -> EngineResult<&Entry> {
        self.entries.get(id).ok_or_else(|| EngineError::EntryNotFound {
            id: id.to_string(),
        })
    }

    /// Applies a validated patch to an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EntryNotFound`] for an unknown id, or
    /// [`EngineError::InvalidEntry`] when a patched value is not positive.
    pub fn update(&mut self, id: &str, patch: EntryPatch) -> EngineResult<Entry> {
        validate_optional_positive("hours", patch.hours)?;
        validate_optional_positive("rate", patch.rate)?;
        validate_optional_positive("rate_over", patch.rate_over)?;
        validate_optional_positive("rate_weekend", patch.rate_weekend)?;

        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| EngineError::EntryNotFound {
                id: id.to_string(),
            })?;

        if let Some(hours) = patch.hours {
            entry.hours = hours;
        }
        if let Some(activity) = patch.activity {
            entry.activity = normalize_activity(Some(activity));
        }
        if let Some(rate) = patch.rate {
            entry.rate = Some(rate);
        }
        if let Some(rate_over) = patch.rate_over {
            entry.rate_over = Some(rate_over);
        }
        if let Some(rate_weekend) = patch.rate_weekend {
            entry.rate_weekend = Some(rate_weekend);
        }
        Ok(entry.clone())
    }

    /// Removes and returns the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EntryNotFound`] when no entry has that id.
    pub fn delete(&mut self, id: &str) -> EngineResult<Entry> {
        self.entries
            .remove(id)
            .ok_or_else(|| EngineError::EntryNotFound {
                id: id.to_string(),
            })
    }

    /// Returns all entries sorted by date, then id.
    pub fn list(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self.entries.values().cloned().collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        entries
    }

    /// Returns the entries within an inclusive date range, sorted by date
    /// then id.
    pub fn entries_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .entries
            .values()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect();
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        entries
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the repository holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_positive(field: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidEntry {
            field: field.to_string(),
            message: "must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_optional_positive(field: &str, value: Option<Decimal>) -> EngineResult<()> {
    match value {
        Some(v) => validate_positive(field, v),
        None => Ok(()),
    }
}

fn normalize_activity(activity: Option<String>) -> Option<String> {
    activity
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
}
