//! Error types for the Shift Rotation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition rejected at the configuration, day-edit, and
//! persistence boundaries. The projection and aggregation functions
//! themselves never fail.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Shift Rotation Engine.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::error::EngineError;
///
/// let error = EngineError::InvalidPayPeriodStartDay { day: 31 };
/// assert_eq!(
///     error.to_string(),
///     "Invalid pay period start day 31: must be between 1 and 28"
/// );
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

    /// A rotation pattern was empty or contained an unusable value.
    #[error("Invalid rotation pattern: {message}")]
    InvalidPattern {
        /// A description of what made the pattern invalid.
        message: String,
    },

    /// A shift name could not be recognized, or a shift value is not allowed here.
    #[error("Invalid shift '{value}'")]
    InvalidShift {
        /// The offending shift text or value.
        value: String,
    },

    /// The pay period start day was outside of 1..=28.
    #[error("Invalid pay period start day {day}: must be between 1 and 28")]
    InvalidPayPeriodStartDay {
        /// The rejected day of month.
        day: i64,
    },

    /// A date key was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date key '{key}': expected YYYY-MM-DD")]
    InvalidDateKey {
        /// The rejected key.
        key: String,
    },

    /// An overtime record contained unusable hour values.
    #[error("Invalid overtime for {date}: {message}")]
    InvalidOvertime {
        /// The date the overtime was recorded for.
        date: NaiveDate,
        /// A description of the problem.
        message: String,
    },

    /// A rotation was configured without a start date.
    #[error("Rotation start date is required")]
    MissingStartDate,

    /// The schedule state could not be written to or read from storage.
    #[error("Storage error at '{path}': {message}")]
    StorageError {
        /// The storage location.
        path: String,
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
