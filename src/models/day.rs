//! Calendar cell descriptor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DailyOvertime, Shift};

/// Everything the presentation layer needs to render and edit one calendar cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDescriptor {
    /// The calendar date of the cell.
    pub date: NaiveDate,
    /// The shift that applies: the override if one exists, otherwise the pattern shift.
    pub effective_shift: Shift,
    /// The shift the rotation pattern alone would produce.
    pub pattern_shift: Shift,
    /// Overtime recorded for the date, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overtime: Option<DailyOvertime>,
    /// Whether the date belongs to the month being displayed.
    pub is_in_displayed_month: bool,
    /// Whether the date is today.
    pub is_today: bool,
    /// Whether an override exists and differs from the pattern shift.
    pub is_overridden: bool,
}
