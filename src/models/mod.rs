//! Core data models for the Shift Rotation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod day;
mod overtime;
mod pay_period;
mod schedule;
mod shift;

pub use day::DayDescriptor;
pub use overtime::DailyOvertime;
pub use pay_period::{DEFAULT_PAY_PERIOD_START_DAY, PayPeriod, PayPeriodStartDay, PayPeriodSummary};
pub use schedule::{
    DayEdit, REVERT_TO_PATTERN, RotationConfig, ScheduleState, ShiftOverrideSetting,
};
pub use shift::{RotationPattern, Shift};
