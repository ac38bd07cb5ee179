//! Pay period models.
//!
//! This module contains the [`PayPeriodStartDay`] setting, the [`PayPeriod`]
//! date range it produces, and the [`PayPeriodSummary`] of overtime hours
//! falling inside that range.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The pay period start day used when none has been configured.
pub const DEFAULT_PAY_PERIOD_START_DAY: u8 = 16;

/// The day of month on which a payroll period begins, always in `1..=28`.
///
/// Restricting the day to 28 keeps it valid in every month.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::models::PayPeriodStartDay;
///
/// assert_eq!(PayPeriodStartDay::default().day(), 16);
/// assert_eq!(PayPeriodStartDay::new(1).unwrap().day(), 1);
/// assert!(PayPeriodStartDay::new(29).is_err());
/// assert!(PayPeriodStartDay::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PayPeriodStartDay(u8);

impl PayPeriodStartDay {
    /// Validates and wraps a day of month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPayPeriodStartDay`] unless `1 <= day <= 28`.
    pub fn new(day: i64) -> EngineResult<Self> {
        match u8::try_from(day) {
            Ok(d) if (1..=28).contains(&d) => Ok(Self(d)),
            _ => Err(EngineError::InvalidPayPeriodStartDay { day }),
        }
    }

    /// Returns the day of month.
    pub fn day(self) -> u8 {
        self.0
    }
}

impl Default for PayPeriodStartDay {
    fn default() -> Self {
        Self(DEFAULT_PAY_PERIOD_START_DAY)
    }
}

impl TryFrom<i64> for PayPeriodStartDay {
    type Error = EngineError;

    fn try_from(day: i64) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl From<PayPeriodStartDay> for u8 {
    fn from(day: PayPeriodStartDay) -> Self {
        day.0
    }
}

/// An inclusive range of calendar dates making up one pay period.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap())); // start date
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 15).unwrap())); // end date
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 16).unwrap())); // after
/// assert_eq!(period.ends_at().to_string(), "2024-02-15 23:59:59.999");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The first date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the first instant of the period: local midnight of the start date.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.start_date
            .and_hms_opt(0, 0, 0)
            .expect("Valid midnight time")
    }

    /// Returns the last instant of the period: 23:59:59.999 on the end date.
    pub fn ends_at(&self) -> NaiveDateTime {
        self.end_date
            .and_hms_milli_opt(23, 59, 59, 999)
            .expect("Valid end of day time")
    }
}

/// Overtime totals for the pay period paid out in a given month.
///
/// Serializes with the period boundaries flattened alongside the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodSummary {
    /// The date range the totals cover.
    #[serde(flatten)]
    pub period: PayPeriod,
    /// Sum of normal overtime hours recorded inside the period.
    pub total_normal_hours: Decimal,
    /// Sum of night overtime hours recorded inside the period.
    pub total_night_hours: Decimal,
}

impl PayPeriodSummary {
    /// Returns `true` when no overtime was recorded inside the period.
    pub fn is_empty(&self) -> bool {
        self.total_normal_hours.is_zero() && self.total_night_hours.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period() -> PayPeriod {
        PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 16).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
        }
    }

    #[test]
    fn test_start_day_bounds() {
        assert!(PayPeriodStartDay::new(1).is_ok());
        assert!(PayPeriodStartDay::new(28).is_ok());
        assert!(PayPeriodStartDay::new(-3).is_err());
        assert!(PayPeriodStartDay::new(300).is_err());
    }

    #[test]
    fn test_start_day_error_reports_value() {
        match PayPeriodStartDay::new(31) {
            Err(EngineError::InvalidPayPeriodStartDay { day }) => assert_eq!(day, 31),
            other => panic!("Expected InvalidPayPeriodStartDay, got {:?}", other),
        }
    }

    #[test]
    fn test_start_day_serde() {
        let day: PayPeriodStartDay = serde_json::from_str("20").unwrap();
        assert_eq!(day.day(), 20);
        assert_eq!(serde_json::to_string(&day).unwrap(), "20");
        assert!(serde_json::from_str::<PayPeriodStartDay>("29").is_err());
    }

    #[test]
    fn test_contains_date_before_start() {
        assert!(!period().contains_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_instants_cover_whole_days() {
        let p = period();
        assert_eq!(p.starts_at().to_string(), "2024-01-16 00:00:00");
        assert_eq!(p.ends_at().to_string(), "2024-02-15 23:59:59.999");
    }

    #[test]
    fn test_summary_serializes_flat() {
        let summary = PayPeriodSummary {
            period: period(),
            total_normal_hours: Decimal::new(35, 1),
            total_night_hours: Decimal::ZERO,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["start_date"], "2024-01-16");
        assert_eq!(json["end_date"], "2024-02-15");
        assert_eq!(json["total_normal_hours"], "3.5");
        assert!(!summary.is_empty());
    }
}
