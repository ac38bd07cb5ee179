//! Daily overtime record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Overtime hours recorded against one calendar date.
///
/// A record with both fields equal to zero is equivalent to having no record
/// at all; the schedule state deletes the date instead of storing it.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::models::DailyOvertime;
/// use rust_decimal::Decimal;
///
/// let overtime = DailyOvertime::new(Decimal::new(25, 1), Decimal::ZERO);
/// assert!(!overtime.is_zero());
/// assert!(DailyOvertime::default().is_zero());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertime {
    /// Overtime hours worked at the normal rate.
    #[serde(default)]
    pub normal_hours: Decimal,
    /// Overtime hours worked at night.
    #[serde(default)]
    pub night_hours: Decimal,
}

impl DailyOvertime {
    /// Creates a new overtime record.
    pub fn new(normal_hours: Decimal, night_hours: Decimal) -> Self {
        Self {
            normal_hours,
            night_hours,
        }
    }

    /// Returns `true` when both hour fields are zero.
    pub fn is_zero(&self) -> bool {
        self.normal_hours.is_zero() && self.night_hours.is_zero()
    }

    /// Checks that neither hour field is negative.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidOvertime`] naming the offending field.
    pub fn validate(&self, date: NaiveDate) -> EngineResult<()> {
        if self.normal_hours < Decimal::ZERO {
            return Err(EngineError::InvalidOvertime {
                date,
                message: "normal hours cannot be negative".to_string(),
            });
        }
        if self.night_hours < Decimal::ZERO {
            return Err(EngineError::InvalidOvertime {
                date,
                message: "night hours cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
