//! Process-wide default rates and overtime threshold.
//!
//! This module defines the [`Settings`] singleton read at entry creation time
//! (to snapshot rates onto new entries) and during aggregation (as the
//! fallback when an entry lacks its own snapshot value).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default normal hourly rate used when no settings have been saved yet.
pub const DEFAULT_RATE: Decimal = Decimal::from_parts(795, 0, 0, false, 2);

/// Process-wide default rates and overtime threshold.
///
/// Mutated only via an explicit save; the engine itself never writes to it.
/// The optional rates fall back through a fixed chain: the overtime rate
/// falls back to the normal rate, and the weekend/holiday rate falls back to
/// the overtime rate (then the normal rate).
///
/// # Example
///
/// ```
/// use worklog_engine::models::Settings;
/// use rust_decimal::Decimal;
///
/// let settings = Settings::default();
/// assert_eq!(settings.threshold, Decimal::from(8));
/// assert_eq!(settings.effective_rate_over(), settings.rate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Normal hourly rate.
    pub rate: Decimal,
    /// Overtime hourly rate; `None` falls back to `rate`.
    #[serde(default)]
    pub rate_over: Option<Decimal>,
    /// Weekend/holiday hourly rate; `None` falls back to the overtime rate.
    #[serde(default)]
    pub rate_weekend: Option<Decimal>,
    /// Hours per day before overtime starts.
    pub threshold: Decimal,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rate: DEFAULT_RATE,
            rate_over: None,
            rate_weekend: None,
            threshold: crate::calculation::DEFAULT_OVERTIME_THRESHOLD,
        }
    }
}

impl Settings {
    /// Returns the overtime rate, falling back to the normal rate.
    pub fn effective_rate_over(&self) -> Decimal {
        self.rate_over.unwrap_or(self.rate)
    }

    /// Returns the weekend/holiday rate, falling back through the overtime
    /// rate to the normal rate.
    pub fn effective_rate_weekend(&self) -> Decimal {
        self.rate_weekend.unwrap_or_else(|| self.effective_rate_over())
    }

    /// Validates the settings for a save operation.
    ///
    /// All rates must be positive where present, and the threshold must be
    /// positive. The engine never re-validates these during aggregation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSettings`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.rate <= Decimal::ZERO {
            return Err(EngineError::InvalidSettings {
                field: "rate".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if let Some(rate_over) = self.rate_over {
            if rate_over <= Decimal::ZERO {
                return Err(EngineError::InvalidSettings {
                    field: "rate_over".to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }
        if let Some(rate_weekend) = self.rate_weekend {
            if rate_weekend <= Decimal::ZERO {
                return Err(EngineError::InvalidSettings {
                    field: "rate_weekend".to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }
        if self.threshold <= Decimal::ZERO {
            return Err(EngineError::InvalidSettings {
                field: "threshold".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
