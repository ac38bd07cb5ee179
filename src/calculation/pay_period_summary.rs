//! Pay period aggregation.
//!
//! Overtime worked in one period is paid two months later. The period paid
//! out in month `M` runs from the start day of `M - 2` through the day before
//! the start day of `M - 1`, inclusive on both ends.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{DailyOvertime, PayPeriod, PayPeriodStartDay, PayPeriodSummary};

use super::date_key::shift_month;

/// Computes the pay period paid out in the month containing `display_month`.
///
/// With a start day of 1 the period is the whole of month `M - 2`.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::pay_period_bounds;
/// use shift_rotation_engine::models::PayPeriodStartDay;
/// use chrono::NaiveDate;
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let period = pay_period_bounds(march, PayPeriodStartDay::default());
///
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
/// ```
pub fn pay_period_bounds(display_month: NaiveDate, start_day: PayPeriodStartDay) -> PayPeriod {
    let offset = Days::new(u64::from(start_day.day() - 1));
    let start_date = shift_month(display_month, -2) + offset;
    let next_start = shift_month(display_month, -1) + offset;
    let end_date = next_start.pred_opt().unwrap_or(start_date);

    PayPeriod {
        start_date,
        end_date,
    }
}

/// Sums the overtime recorded inside the pay period paid out in `display_month`.
///
/// Entries outside the period contribute nothing. Totals start at zero.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::summarize_period;
/// use shift_rotation_engine::models::{DailyOvertime, PayPeriodStartDay};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let mut overtime = BTreeMap::new();
/// overtime.insert(
///     NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
///     DailyOvertime::new(Decimal::new(2, 0), Decimal::new(1, 0)),
/// );
/// overtime.insert(
///     NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(), // next period
///     DailyOvertime::new(Decimal::new(8, 0), Decimal::ZERO),
/// );
///
/// let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let summary = summarize_period(&overtime, march, PayPeriodStartDay::default());
/// assert_eq!(summary.total_normal_hours, Decimal::new(2, 0));
/// assert_eq!(summary.total_night_hours, Decimal::new(1, 0));
/// ```
pub fn summarize_period(
    overtime: &BTreeMap<NaiveDate, DailyOvertime>,
    display_month: NaiveDate,
    start_day: PayPeriodStartDay,
) -> PayPeriodSummary {
    let period = pay_period_bounds(display_month, start_day);

    let (total_normal_hours, total_night_hours) = overtime
        .range(period.start_date..=period.end_date)
        .fold((Decimal::ZERO, Decimal::ZERO), |(normal, night), (_, entry)| {
            (normal + entry.normal_hours, night + entry.night_hours)
        });

    PayPeriodSummary {
        period,
        total_normal_hours,
        total_night_hours,
    }
}
