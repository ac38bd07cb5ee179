//! Shift projection.
//!
//! This module maps a calendar date onto a position in the repeating rotation
//! pattern and combines that with any explicit per-day override.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{RotationPattern, Shift};

/// Computes the shift the rotation pattern assigns to `target`.
///
/// # Behavior
///
/// - No start date or no pattern: [`Shift::Unassigned`].
/// - `target` before the start date: [`Shift::Unassigned`]. This guard runs
///   before any offset arithmetic so earlier dates never wrap into the cycle.
/// - Otherwise the shift at `days_between(start, target) % cycle_length`.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::project_shift;
/// use shift_rotation_engine::models::{RotationPattern, Shift};
/// use chrono::NaiveDate;
///
/// let pattern = RotationPattern::new(vec![
///     Shift::Morning, Shift::Afternoon, Shift::Night, Shift::Off,
/// ]).unwrap();
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// // 4 days after the start wraps back to the first position
/// let target = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(project_shift(target, Some(start), Some(&pattern)), Shift::Morning);
///
/// let before = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
/// assert_eq!(project_shift(before, Some(start), Some(&pattern)), Shift::Unassigned);
/// ```
pub fn project_shift(
    target: NaiveDate,
    start_date: Option<NaiveDate>,
    pattern: Option<&RotationPattern>,
) -> Shift {
    let (Some(start_date), Some(pattern)) = (start_date, pattern) else {
        return Shift::Unassigned;
    };

    if target < start_date {
        return Shift::Unassigned;
    }

    let diff_days = target.signed_duration_since(start_date).num_days();
    pattern.shift_at(diff_days.unsigned_abs())
}

/// The shift resolved for one date, with the pattern value it was compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftResolution {
    /// The override if one exists, otherwise the pattern shift.
    pub effective_shift: Shift,
    /// The shift the pattern alone produces.
    pub pattern_shift: Shift,
    /// Whether an override exists and differs from the pattern shift.
    pub is_overridden: bool,
}

/// Resolves the effective shift for `date`, letting an override win over the pattern.
///
/// An override equal to the pattern's own value is still applied, but it is not
/// reported as overridden: the comparison is against the live projection.
pub fn resolve_shift(
    date: NaiveDate,
    start_date: Option<NaiveDate>,
    pattern: Option<&RotationPattern>,
    overrides: &BTreeMap<NaiveDate, Shift>,
) -> ShiftResolution {
    let pattern_shift = project_shift(date, start_date, pattern);
    match overrides.get(&date) {
        Some(&override_shift) => ShiftResolution {
            effective_shift: override_shift,
            pattern_shift,
            is_overridden: override_shift != pattern_shift,
        },
        None => ShiftResolution {
            effective_shift: pattern_shift,
            pattern_shift,
            is_overridden: false,
        },
    }
}

/// Returns the shift that applies to `date` once overrides are taken into account.
pub fn effective_shift(
    date: NaiveDate,
    start_date: Option<NaiveDate>,
    pattern: Option<&RotationPattern>,
    overrides: &BTreeMap<NaiveDate, Shift>,
) -> Shift {
    resolve_shift(date, start_date, pattern, overrides).effective_shift
}
