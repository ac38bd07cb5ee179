//! Canonical date keys and month arithmetic.
//!
//! Date keys are `YYYY-MM-DD` strings built from a date's own calendar fields.
//! Every map keyed by date is persisted with these keys, and reading them back
//! goes through [`parse_date_key`] so the write and read paths agree exactly.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::{EngineError, EngineResult};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as its canonical `YYYY-MM-DD` key.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(date_key(date), "2024-01-05");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a canonical date key.
///
/// Only the exact canonical form is accepted: `2024-1-5` or `2024-01-05T00:00`
/// are rejected even though a lenient parser could read them.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDateKey`] for anything that is not a
/// canonical key of a real calendar date.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::parse_date_key;
///
/// assert!(parse_date_key("2024-02-29").is_ok());
/// assert!(parse_date_key("2023-02-29").is_err());
/// assert!(parse_date_key("2024-1-5").is_err());
/// ```
pub fn parse_date_key(key: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .ok()
        .filter(|date| date_key(*date) == key)
        .ok_or_else(|| EngineError::InvalidDateKey {
            key: key.to_string(),
        })
}

/// Returns the first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Returns the first day of the month `offset` months away from the month of `date`.
///
/// Negative offsets move backward. Results are clamped to the first and last
/// representable months.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::shift_month;
/// use chrono::NaiveDate;
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(shift_month(march, -2), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// assert_eq!(shift_month(march, 10), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// ```
pub fn shift_month(date: NaiveDate, offset: i32) -> NaiveDate {
    let first = first_of_month(date);
    let months = Months::new(offset.unsigned_abs());
    if offset >= 0 {
        first
            .checked_add_months(months)
            .unwrap_or_else(|| first_of_month(NaiveDate::MAX))
    } else {
        first
            .checked_sub_months(months)
            .unwrap_or_else(|| first_of_month(NaiveDate::MIN))
    }
}
