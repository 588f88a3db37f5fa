//! Settings file loading.
//!
//! Settings live in a single YAML file; this module reads and validates it.
//! Callers that run without a settings file fall back to
//! [`Settings::default`](crate::models::Settings).
//!
//! # File format
//!
//! ```yaml
//! rate: "7.95"
//! rate_over: "11.93"   # optional, falls back to rate
//! rate_weekend: "15.90" # optional, falls back to rate_over
//! threshold: "8"
//! ```

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Settings;

/// Loads and validates settings from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the settings file (e.g., "./config/settings.yaml")
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] when the file cannot be read,
/// [`EngineError::ConfigParseError`] for invalid YAML, and
/// [`EngineError::InvalidSettings`] when the file holds non-positive values.
///
/// # Example
///
/// ```no_run
/// use worklog_engine::config::load_settings;
///
/// let settings = load_settings("./config/settings.yaml")?;
/// # Ok::<(), worklog_engine::error::EngineError>(())
/// ```
pub fn load_settings<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let settings: Settings =
        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::path::PathBuf;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_temp_settings(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("worklog_engine_{name}.yaml"));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_settings() {
        let path = write_temp_settings(
            "full",
            "rate: \"9.50\"\nrate_over: \"14.25\"\nrate_weekend: \"19.00\"\nthreshold: \"7.5\"\n",
        );

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.rate, dec("9.50"));
        assert_eq!(settings.rate_over, Some(dec("14.25")));
        assert_eq!(settings.rate_weekend, Some(dec("19.00")));
        assert_eq!(settings.threshold, dec("7.5"));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_minimal_settings() {
        let path = write_temp_settings("minimal", "rate: \"7.95\"\nthreshold: \"8\"\n");

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.rate, dec("7.95"));
        assert_eq!(settings.rate_over, None);
        assert_eq!(settings.rate_weekend, None);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_config_not_found() {
        let err = load_settings("/nonexistent/settings.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let path = write_temp_settings("bad_yaml", "rate: [not a rate\n");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, EngineError::ConfigParseError { .. }));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_non_positive_values_rejected() {
        let path = write_temp_settings("zero_rate", "rate: \"0\"\nthreshold: \"8\"\n");

        let err = load_settings(&path).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings { .. }));

        fs::remove_file(path).ok();
    }
}
