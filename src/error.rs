//! Error types for the hours engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the engine, the report store and the configuration
//! layer can produce.

use thiserror::Error;

/// The main error type for the hours engine.
///
/// # Example
///
/// ```
/// use riso_hours::error::EngineError;
///
/// let error = EngineError::InvalidTime {
///     value: "8.30".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time '8.30': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A wall-clock time string was not in `HH:MM` form.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The offending input.
        value: String,
        /// What was wrong with it.
        message: String,
    },

    /// A zero-based month outside `0..=11`, or a year chrono cannot represent.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The requested zero-based month.
        month: u32,
    },

    /// No report with the given id exists in the store.
    #[error("Report not found: {id}")]
    ReportNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Reading or writing the persisted report file failed.
    #[error("Report store error at '{path}': {message}")]
    StoreError {
        /// The file involved.
        path: String,
        /// A description of the failure.
        message: String,
    },

    /// A sync payload was requested while synchronisation is disabled.
    #[error("Synchronisation is not enabled")]
    SyncDisabled,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
