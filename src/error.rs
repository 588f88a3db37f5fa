//! Error types for the work-hours ledger engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The aggregation functions themselves are total and never fail; errors only
//! arise at the entry/settings validation boundary, in the repository, and
//! when loading configuration files.

use thiserror::Error;

/// The main error type for the work-hours ledger engine.
///
/// # Example
///
/// ```
/// use worklog_engine::error::EngineError;
///
/// let error = EngineError::EntryNotFound {
///     id: "missing".to_string(),
/// };
/// assert_eq!(error.to_string(), "Entry not found: missing");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An entry field failed validation at creation or update time.
    #[error("Invalid entry field '{field}': {message}")]
    InvalidEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A settings field failed validation on save.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No entry exists with the given identifier.
    #[error("Entry not found: {id}")]
    EntryNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Settings file was not found at the specified path.
    #[error("Settings file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Settings file could not be parsed.
    #[error("Failed to parse settings file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
