//! Request types for the schedule API.
//!
//! This module defines the JSON request bodies for the day editor and the
//! rotation setup endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    DailyOvertime, DayEdit, PayPeriodStartDay, RotationPattern, Shift, ShiftOverrideSetting,
};

/// Request body for `PUT /days/:date`.
///
/// ```json
/// {
///   "overtime": { "normal_hours": "2", "night_hours": "1.5" },
///   "shift_override": "night"
/// }
/// ```
///
/// `shift_override` may be a shift name, `"revert_to_pattern"`, or omitted to
/// leave any existing override as it is. Omitting `overtime` likewise keeps the
/// hours already recorded for the date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayEditRequest {
    /// Overtime for the day. All-zero hours delete the stored record.
    #[serde(default)]
    pub overtime: Option<DailyOvertime>,
    /// What to do with the day's override.
    #[serde(default)]
    pub shift_override: Option<ShiftOverrideSetting>,
}

impl DayEditRequest {
    /// Binds the request body to the date from the path.
    ///
    /// `current_overtime` is what is stored for the date now; it is resubmitted
    /// unchanged when the request carries no overtime.
    pub fn into_edit(self, date: NaiveDate, current_overtime: Option<DailyOvertime>) -> DayEdit {
        DayEdit {
            date,
            overtime: self
                .overtime
                .or(current_overtime)
                .unwrap_or_default(),
            shift_override: self.shift_override,
        }
    }
}

/// A rotation pattern as submitted: either a list of shift names or one
/// comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternRequest {
    /// `["morning", "night", "off"]`
    Shifts(Vec<String>),
    /// `"morning, night, off"`
    Text(String),
}

impl PatternRequest {
    /// Parses the submitted shift names into a pattern.
    pub fn into_pattern(self) -> EngineResult<RotationPattern> {
        match self {
            PatternRequest::Text(text) => RotationPattern::parse(&text),
            PatternRequest::Shifts(names) => {
                let shifts = names
                    .iter()
                    .map(|name| {
                        name.parse::<Shift>()
                            .map_err(|_| EngineError::InvalidPattern {
                                message: format!("unknown shift '{}'", name),
                            })
                    })
                    .collect::<EngineResult<Vec<_>>>()?;
                RotationPattern::new(shifts)
            }
        }
    }
}

/// Request body for `PUT /configuration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationRequest {
    /// The repeating shift sequence.
    pub pattern: PatternRequest,
    /// The date on which the first shift of the pattern applies.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// The pay period start day; defaults to 16 when omitted.
    #[serde(default)]
    pub pay_period_start_day: Option<i64>,
}

impl ConfigurationRequest {
    /// Validates the request in the order the setup form reports problems:
    /// start date, then pattern, then pay period start day.
    pub fn validate(self) -> EngineResult<(RotationPattern, NaiveDate, PayPeriodStartDay)> {
        let start_date = self.start_date.ok_or(EngineError::MissingStartDate)?;
        let pattern = self.pattern.into_pattern()?;
        let start_day = match self.pay_period_start_day {
            Some(day) => PayPeriodStartDay::new(day)?,
            None => PayPeriodStartDay::default(),
        };
        Ok((pattern, start_date, start_day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_day_edit_defaults() {
        let request: DayEditRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.overtime.is_none());
        assert!(request.shift_override.is_none());
    }

    #[test]
    fn test_omitted_overtime_keeps_current_hours() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let current = DailyOvertime::new(Decimal::new(3, 0), Decimal::new(1, 0));

        let request: DayEditRequest =
            serde_json::from_value(json!({"shift_override": "night"})).unwrap();
        let edit = request.into_edit(date, Some(current));
        assert_eq!(edit.overtime, current);
        assert_eq!(edit.shift_override, Some(ShiftOverrideSetting::Set(Shift::Night)));

        let request: DayEditRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.into_edit(date, None).overtime.is_zero());
    }

    #[test]
    fn test_explicit_zero_overtime_replaces_current_hours() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let current = DailyOvertime::new(Decimal::new(3, 0), Decimal::new(1, 0));

        let request: DayEditRequest = serde_json::from_value(json!({
            "overtime": {"normal_hours": "0", "night_hours": "0"}
        }))
        .unwrap();
        assert!(request.into_edit(date, Some(current)).overtime.is_zero());
    }

    #[test]
    fn test_day_edit_with_revert() {
        let request: DayEditRequest =
            serde_json::from_value(json!({"shift_override": "revert_to_pattern"})).unwrap();
        assert_eq!(
            request.shift_override,
            Some(ShiftOverrideSetting::RevertToPattern)
        );
    }

    #[test]
    fn test_day_edit_rejects_unknown_shift() {
        assert!(serde_json::from_value::<DayEditRequest>(json!({"shift_override": "brunch"})).is_err());
    }

    #[test]
    fn test_pattern_from_list_and_text() {
        let list: PatternRequest = serde_json::from_value(json!(["morning", "noche"])).unwrap();
        assert_eq!(
            list.into_pattern().unwrap().shifts(),
            &[Shift::Morning, Shift::Night]
        );

        let text: PatternRequest = serde_json::from_value(json!("tarde, libre")).unwrap();
        assert_eq!(
            text.into_pattern().unwrap().shifts(),
            &[Shift::Afternoon, Shift::Off]
        );
    }

    #[test]
    fn test_empty_pattern_list_rejected() {
        let request = PatternRequest::Shifts(vec![]);
        assert!(matches!(
            request.into_pattern(),
            Err(EngineError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_configuration_requires_start_date() {
        let request: ConfigurationRequest =
            serde_json::from_value(json!({"pattern": ["morning"]})).unwrap();
        assert!(matches!(request.validate(), Err(EngineError::MissingStartDate)));
    }

    #[test]
    fn test_configuration_checks_start_date_before_pattern() {
        let request: ConfigurationRequest =
            serde_json::from_value(json!({"pattern": []})).unwrap();
        assert!(matches!(request.validate(), Err(EngineError::MissingStartDate)));
    }

    #[test]
    fn test_configuration_defaults_start_day() {
        let request: ConfigurationRequest = serde_json::from_value(json!({
            "pattern": "morning, off",
            "start_date": "2024-01-01"
        }))
        .unwrap();
        let (pattern, start_date, start_day) = request.validate().unwrap();
        assert_eq!(pattern.cycle_length(), 2);
        assert_eq!(start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(start_day.day(), 16);
    }

    #[test]
    fn test_configuration_rejects_start_day() {
        let request: ConfigurationRequest = serde_json::from_value(json!({
            "pattern": ["off"],
            "start_date": "2024-01-01",
            "pay_period_start_day": 29
        }))
        .unwrap();
        assert!(matches!(
            request.validate(),
            Err(EngineError::InvalidPayPeriodStartDay { day: 29 })
        ));
    }
}
