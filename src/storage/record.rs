//! The persisted schedule record.
//!
//! [`StoredData`] is the flat, human-diffable JSON shape written to storage.
//! Loading is lenient: anything unusable is logged and dropped so a damaged
//! record degrades to a partially empty schedule instead of refusing to load.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculation::{date_key, parse_date_key};
use crate::models::{
    DailyOvertime, PayPeriodStartDay, RotationConfig, RotationPattern, ScheduleState, Shift,
};

/// Override entries as stored: a list of `[date_key, shift]` pairs.
///
/// Older records stored overrides as a JSON object keyed by date, which is
/// still accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredOverrides {
    /// `[["2024-01-05", "night"], ...]`
    Pairs(Vec<(String, Shift)>),
    /// `{"2024-01-05": "night", ...}`
    Map(BTreeMap<String, Shift>),
}

impl Default for StoredOverrides {
    fn default() -> Self {
        StoredOverrides::Pairs(Vec::new())
    }
}

impl StoredOverrides {
    fn into_pairs(self) -> Vec<(String, Shift)> {
        match self {
            StoredOverrides::Pairs(pairs) => pairs,
            StoredOverrides::Map(map) => map.into_iter().collect(),
        }
    }
}

/// The persisted form of a [`ScheduleState`].
///
/// # Example
///
/// ```
/// use shift_rotation_engine::storage::StoredData;
///
/// let json = r#"{
///     "rotation_pattern": ["morning", "night", "off"],
///     "rotation_start_date": "2024-01-01",
///     "overtime_data": [["2024-01-05", {"normal_hours": "2", "night_hours": "1"}]],
///     "shift_overrides": [["2024-01-06", "off"]]
/// }"#;
///
/// let record: StoredData = serde_json::from_str(json).unwrap();
/// let state = record.into_state(Default::default());
/// assert!(state.is_configured());
/// assert_eq!(state.pay_period_start_day.day(), 16);
/// assert_eq!(state.overtime.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredData {
    /// The rotation pattern, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_pattern: Option<Vec<Shift>>,
    /// The rotation start date as an ISO-8601 date, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_start_date: Option<String>,
    /// `[date_key, overtime]` pairs.
    #[serde(default)]
    pub overtime_data: Vec<(String, DailyOvertime)>,
    /// `[date_key, shift]` pairs.
    #[serde(default)]
    pub shift_overrides: StoredOverrides,
    /// The pay period start day, if one was saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period_start_day: Option<i64>,
}

impl StoredData {
    /// Captures a schedule state for persistence.
    pub fn from_state(state: &ScheduleState) -> Self {
        Self {
            rotation_pattern: state.pattern().map(|p| p.shifts().to_vec()),
            rotation_start_date: state.start_date().map(date_key),
            overtime_data: state
                .overtime
                .iter()
                .map(|(date, overtime)| (date_key(*date), *overtime))
                .collect(),
            shift_overrides: StoredOverrides::Pairs(
                state
                    .overrides
                    .iter()
                    .map(|(date, shift)| (date_key(*date), *shift))
                    .collect(),
            ),
            pay_period_start_day: Some(i64::from(state.pay_period_start_day.day())),
        }
    }

    /// Rebuilds a schedule state, skipping anything that does not validate.
    ///
    /// - A missing or out-of-range start day falls back to `default_start_day`.
    /// - The rotation is kept only when both a valid pattern and a valid start date are present.
    /// - Entries with malformed date keys, all-zero or negative overtime, or
    ///   `Unassigned` overrides are dropped.
    pub fn into_state(self, default_start_day: PayPeriodStartDay) -> ScheduleState {
        let pay_period_start_day = match self.pay_period_start_day {
            None => default_start_day,
            Some(day) => PayPeriodStartDay::new(day).unwrap_or_else(|err| {
                warn!(error = %err, "Stored pay period start day is invalid, using default");
                default_start_day
            }),
        };

        ScheduleState {
            rotation: restore_rotation(self.rotation_pattern, self.rotation_start_date),
            pay_period_start_day,
            overtime: restore_overtime(self.overtime_data),
            overrides: restore_overrides(self.shift_overrides.into_pairs()),
        }
    }
}

fn restore_rotation(
    pattern: Option<Vec<Shift>>,
    start_date: Option<String>,
) -> Option<RotationConfig> {
    let (pattern, start_date) = match (pattern, start_date) {
        (Some(pattern), Some(start_date)) => (pattern, start_date),
        (None, None) => return None,
        _ => {
            warn!("Stored rotation is missing its pattern or start date, treating as not configured");
            return None;
        }
    };

    let pattern = RotationPattern::new(pattern)
        .map_err(|err| warn!(error = %err, "Stored rotation pattern is invalid"))
        .ok()?;
    let start_date = parse_start_date(&start_date)
        .map_err(|_| warn!(start_date = %start_date, "Stored rotation start date is invalid"))
        .ok()?;

    Some(RotationConfig {
        pattern,
        start_date,
    })
}

/// Reads the date portion of a stored start date.
///
/// Records written by older clients carry a full timestamp such as
/// `2024-01-01T05:00:00.000Z`; only the calendar date before `T` is used.
fn parse_start_date(value: &str) -> crate::error::EngineResult<NaiveDate> {
    let date_part = value.split_once('T').map_or(value, |(date, _)| date);
    parse_date_key(date_part)
}

fn restore_overtime(entries: Vec<(String, DailyOvertime)>) -> BTreeMap<NaiveDate, DailyOvertime> {
    let mut overtime = BTreeMap::new();
    for (key, entry) in entries {
        let Ok(date) = parse_date_key(&key) else {
            warn!(date_key = %key, "Skipping overtime with malformed date key");
            continue;
        };
        if let Err(err) = entry.validate(date) {
            warn!(error = %err, "Skipping invalid overtime record");
            continue;
        }
        if entry.is_zero() {
            warn!(date_key = %key, "Skipping all-zero overtime record");
            continue;
        }
        overtime.insert(date, entry);
    }
    overtime
}

fn restore_overrides(entries: Vec<(String, Shift)>) -> BTreeMap<NaiveDate, Shift> {
    let mut overrides = BTreeMap::new();
    for (key, shift) in entries {
        let Ok(date) = parse_date_key(&key) else {
            warn!(date_key = %key, "Skipping override with malformed date key");
            continue;
        };
        if !shift.is_assignable() {
            warn!(date_key = %key, "Skipping unassigned override");
            continue;
        }
        overrides.insert(date, shift);
    }
    overrides
}
