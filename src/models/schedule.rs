//! Schedule state and the acceptance functions that change it.
//!
//! [`ScheduleState`] owns the four user-editable collections: the rotation
//! configuration, the pay period start day, the overtime map, and the override
//! map. Changes arrive one of two ways:
//!
//! - [`ScheduleState::reconfigure`] replaces the rotation and start day wholesale.
//! - [`ScheduleState::apply_day_edit`] creates, updates, or deletes the entries of
//!   a single date.
//!
//! Both validate before touching anything, so a rejected edit leaves the state
//! exactly as it was.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{build_month_grid, describe_day, summarize_period};
use crate::error::{EngineError, EngineResult};

use super::{DailyOvertime, DayDescriptor, PayPeriodStartDay, PayPeriodSummary, RotationPattern, Shift};

/// Marker text for [`ShiftOverrideSetting::RevertToPattern`].
pub const REVERT_TO_PATTERN: &str = "revert_to_pattern";

/// A configured rotation: the repeating pattern and the date of its first day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationConfig {
    /// The repeating shift sequence.
    pub pattern: RotationPattern,
    /// The date on which `pattern[0]` applies.
    pub start_date: NaiveDate,
}

/// What a day edit should do with the override for its date.
///
/// Serializes as a shift name, or as `"revert_to_pattern"`.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::models::{Shift, ShiftOverrideSetting};
///
/// let setting: ShiftOverrideSetting = serde_json::from_str("\"noche\"").unwrap();
/// assert_eq!(setting, ShiftOverrideSetting::Set(Shift::Night));
///
/// let revert: ShiftOverrideSetting = serde_json::from_str("\"revert_to_pattern\"").unwrap();
/// assert_eq!(revert, ShiftOverrideSetting::RevertToPattern);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ShiftOverrideSetting {
    /// Store an explicit shift for the date.
    Set(Shift),
    /// Remove any override so the pattern applies again.
    RevertToPattern,
}

impl TryFrom<String> for ShiftOverrideSetting {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case(REVERT_TO_PATTERN) {
            return Ok(ShiftOverrideSetting::RevertToPattern);
        }
        value.parse().map(ShiftOverrideSetting::Set)
    }
}

impl From<ShiftOverrideSetting> for String {
    fn from(setting: ShiftOverrideSetting) -> Self {
        setting.to_string()
    }
}

impl fmt::Display for ShiftOverrideSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftOverrideSetting::Set(shift) => write!(f, "{}", shift.to_string().to_lowercase()),
            ShiftOverrideSetting::RevertToPattern => write!(f, "{}", REVERT_TO_PATTERN),
        }
    }
}

/// A single-date edit submitted from the day editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayEdit {
    /// The date being edited.
    pub date: NaiveDate,
    /// The overtime for the date. All-zero hours delete the stored record.
    pub overtime: DailyOvertime,
    /// The override action, or `None` to leave the override untouched.
    pub shift_override: Option<ShiftOverrideSetting>,
}

/// The complete user-owned schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleState {
    /// The rotation, or `None` when not yet configured.
    pub rotation: Option<RotationConfig>,
    /// The day of month on which pay periods begin.
    pub pay_period_start_day: PayPeriodStartDay,
    /// Overtime records keyed by date. Never contains all-zero records.
    pub overtime: BTreeMap<NaiveDate, DailyOvertime>,
    /// Explicit shifts keyed by date. Never contains `Unassigned`.
    pub overrides: BTreeMap<NaiveDate, Shift>,
}

impl ScheduleState {
    /// Returns `true` once a rotation pattern and start date have been set.
    pub fn is_configured(&self) -> bool {
        self.rotation.is_some()
    }

    /// Returns the configured rotation start date.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.rotation.as_ref().map(|r| r.start_date)
    }

    /// Returns the configured rotation pattern.
    pub fn pattern(&self) -> Option<&RotationPattern> {
        self.rotation.as_ref().map(|r| &r.pattern)
    }

    /// Replaces the rotation and pay period start day.
    ///
    /// Overtime and override entries are kept as they are.
    pub fn reconfigure(
        &mut self,
        pattern: RotationPattern,
        start_date: NaiveDate,
        pay_period_start_day: PayPeriodStartDay,
    ) {
        self.rotation = Some(RotationConfig {
            pattern,
            start_date,
        });
        self.pay_period_start_day = pay_period_start_day;
    }

    /// Applies a day edit.
    ///
    /// - All-zero overtime deletes the date's overtime record; anything else replaces it.
    /// - [`ShiftOverrideSetting::RevertToPattern`] deletes the date's override.
    /// - [`ShiftOverrideSetting::Set`] stores the override, even when it matches the pattern.
    /// - `None` leaves the override map untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOvertime`] for negative hours and
    /// [`EngineError::InvalidShift`] when asked to store `Unassigned`. The state
    /// is unchanged on error.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_rotation_engine::models::{DailyOvertime, DayEdit, ScheduleState, Shift, ShiftOverrideSetting};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
    /// let mut state = ScheduleState::default();
    ///
    /// state.apply_day_edit(DayEdit {
    ///     date,
    ///     overtime: DailyOvertime::new(Decimal::new(2, 0), Decimal::ZERO),
    ///     shift_override: Some(ShiftOverrideSetting::Set(Shift::Night)),
    /// }).unwrap();
    /// assert_eq!(state.overrides.get(&date), Some(&Shift::Night));
    ///
    /// state.apply_day_edit(DayEdit {
    ///     date,
    ///     overtime: DailyOvertime::default(),
    ///     shift_override: Some(ShiftOverrideSetting::RevertToPattern),
    /// }).unwrap();
    /// assert!(state.overtime.is_empty());
    /// assert!(state.overrides.is_empty());
    /// ```
    pub fn apply_day_edit(&mut self, edit: DayEdit) -> EngineResult<()> {
        edit.overtime.validate(edit.date)?;
        if let Some(ShiftOverrideSetting::Set(shift)) = edit.shift_override {
            if !shift.is_assignable() {
                return Err(EngineError::InvalidShift {
                    value: shift.to_string(),
                });
            }
        }

        if edit.overtime.is_zero() {
            self.overtime.remove(&edit.date);
        } else {
            self.overtime.insert(edit.date, edit.overtime);
        }

        match edit.shift_override {
            Some(ShiftOverrideSetting::Set(shift)) => {
                self.overrides.insert(edit.date, shift);
            }
            Some(ShiftOverrideSetting::RevertToPattern) => {
                self.overrides.remove(&edit.date);
            }
            None => {}
        }

        Ok(())
    }

    /// Builds the 42-cell calendar grid for the month containing `display_month`.
    pub fn month_grid(&self, display_month: NaiveDate, today: NaiveDate) -> Vec<DayDescriptor> {
        build_month_grid(
            display_month,
            today,
            self.start_date(),
            self.pattern(),
            &self.overtime,
            &self.overrides,
        )
    }

    /// Describes a single date as it would appear in its own month's grid.
    pub fn day(&self, date: NaiveDate, today: NaiveDate) -> DayDescriptor {
        describe_day(
            date,
            date,
            today,
            self.start_date(),
            self.pattern(),
            &self.overtime,
            &self.overrides,
        )
    }

    /// Summarizes overtime for the pay period paid out in `display_month`.
    pub fn pay_period_summary(&self, display_month: NaiveDate) -> PayPeriodSummary {
        summarize_period(&self.overtime, display_month, self.pay_period_start_day)
    }
}
