//! Calendar grid building.
//!
//! A displayed month is always rendered as six full Sunday-first weeks, so the
//! grid has a constant [`GRID_CELLS`] entries regardless of how many weeks the
//! month actually spans.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::models::{DailyOvertime, DayDescriptor, RotationPattern, Shift};

use super::date_key::first_of_month;
use super::shift_projection::resolve_shift;

/// Number of cells in a month grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// Returns the first cell of the grid for the month containing `display_month`:
/// the Sunday on or before the first of that month.
///
/// Returns `None` when the six-week window around the month does not fit in
/// the representable date range, which only happens for the first and last
/// months chrono can express.
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::grid_start;
/// use chrono::NaiveDate;
///
/// // March 2024 begins on a Friday
/// let march = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(grid_start(march), NaiveDate::from_ymd_opt(2024, 2, 25));
/// assert_eq!(grid_start(NaiveDate::MAX), None);
/// ```
pub fn grid_start(display_month: NaiveDate) -> Option<NaiveDate> {
    let first = first_of_month(display_month);
    let start =
        first.checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_sunday())))?;
    start.checked_add_days(Days::new(GRID_CELLS as u64 - 1))?;
    Some(start)
}

/// Builds the [`GRID_CELLS`] day descriptors for the month containing `display_month`.
///
/// Any day of the month may be passed; only its year and month are used.
/// `today` marks the cell whose `is_today` is set. A month rejected by
/// [`grid_start`] yields no cells.
///
/// # Arguments
///
/// * `display_month` - Any date in the month to display
/// * `today` - The current local date
/// * `start_date` - The rotation start date, if configured
/// * `pattern` - The rotation pattern, if configured
/// * `overtime` - Overtime records keyed by date
/// * `overrides` - Explicit shifts keyed by date
///
/// # Example
///
/// ```
/// use shift_rotation_engine::calculation::{build_month_grid, GRID_CELLS};
/// use shift_rotation_engine::models::Shift;
/// use chrono::{Datelike, NaiveDate, Weekday};
/// use std::collections::BTreeMap;
///
/// let month = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let grid = build_month_grid(month, month, None, None, &BTreeMap::new(), &BTreeMap::new());
///
/// assert_eq!(grid.len(), GRID_CELLS);
/// assert_eq!(grid[0].date.weekday(), Weekday::Sun);
/// assert!(grid.iter().all(|d| d.effective_shift == Shift::Unassigned));
/// ```
pub fn build_month_grid(
    display_month: NaiveDate,
    today: NaiveDate,
    start_date: Option<NaiveDate>,
    pattern: Option<&RotationPattern>,
    overtime: &BTreeMap<NaiveDate, DailyOvertime>,
    overrides: &BTreeMap<NaiveDate, Shift>,
) -> Vec<DayDescriptor> {
    let Some(start) = grid_start(display_month) else {
        return Vec::new();
    };

    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| {
            describe_day(
                date,
                display_month,
                today,
                start_date,
                pattern,
                overtime,
                overrides,
            )
        })
        .collect()
}

/// Builds the descriptor for one date as seen from the month of `display_month`.
#[allow(clippy::too_many_arguments)]
pub fn describe_day(
    date: NaiveDate,
    display_month: NaiveDate,
    today: NaiveDate,
    start_date: Option<NaiveDate>,
    pattern: Option<&RotationPattern>,
    overtime: &BTreeMap<NaiveDate, DailyOvertime>,
    overrides: &BTreeMap<NaiveDate, Shift>,
) -> DayDescriptor {
    let resolution = resolve_shift(date, start_date, pattern, overrides);

    DayDescriptor {
        date,
        effective_shift: resolution.effective_shift,
        pattern_shift: resolution.pattern_shift,
        overtime: overtime.get(&date).copied(),
        is_in_displayed_month: date.year() == display_month.year()
            && date.month() == display_month.month(),
        is_today: date == today,
        is_overridden: resolution.is_overridden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use rust_decimal::Decimal;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn pattern() -> RotationPattern {
        RotationPattern::new(vec![Shift::Morning, Shift::Afternoon, Shift::Night, Shift::Off])
            .unwrap()
    }

    fn empty_grid(month: &str) -> Vec<DayDescriptor> {
        empty_grid_at(date(month))
    }

    fn empty_grid_at(month: NaiveDate) -> Vec<DayDescriptor> {
        build_month_grid(
            month,
            date("2000-01-01"),
            None,
            None,
            &BTreeMap::new(),
            &BTreeMap::new(),
        )
    }

    #[test]
    fn test_grid_always_has_42_cells_starting_sunday() {
        for month in ["2024-02-01", "2015-02-01", "2024-09-01", "2023-12-01", "2026-06-01"] {
            let grid = empty_grid(month);
            assert_eq!(grid.len(), GRID_CELLS, "{}", month);
            assert_eq!(grid[0].date.weekday(), Weekday::Sun, "{}", month);
        }
    }

    #[test]
    fn test_grid_dates_are_consecutive() {
        let grid = empty_grid("2024-03-01");
        for pair in grid.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }

    #[test]
    fn test_month_starting_on_sunday_begins_at_first() {
        // September 2024 starts on a Sunday
        let grid = empty_grid("2024-09-20");
        assert_eq!(grid[0].date, date("2024-09-01"));
        assert!(grid[0].is_in_displayed_month);
    }

    #[test]
    fn test_in_displayed_month_flags() {
        let grid = empty_grid("2024-03-01");
        // Grid runs 2024-02-25 .. 2024-04-06
        assert_eq!(grid[0].date, date("2024-02-25"));
        assert_eq!(grid[41].date, date("2024-04-06"));
        let in_month = grid.iter().filter(|d| d.is_in_displayed_month).count();
        assert_eq!(in_month, 31);
        assert!(!grid[0].is_in_displayed_month);
        assert!(grid[5].is_in_displayed_month); // 2024-03-01
    }

    #[test]
    fn test_in_displayed_month_compares_year() {
        // December 2023 grid must not mark December cells of other years
        let grid = empty_grid("2023-12-01");
        assert!(grid
            .iter()
            .filter(|d| d.is_in_displayed_month)
            .all(|d| d.date.year() == 2023 && d.date.month() == 12));
    }

    #[test]
    fn test_today_flag_by_value() {
        let grid = build_month_grid(
            date("2024-03-01"),
            date("2024-03-14"),
            None,
            None,
            &BTreeMap::new(),
            &BTreeMap::new(),
        );
        let today: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date("2024-03-14"));
    }

    #[test]
    fn test_today_outside_grid() {
        let grid = empty_grid("2024-03-01");
        assert!(grid.iter().all(|d| !d.is_today));
    }

    #[test]
    fn test_grid_projects_pattern_and_overrides() {
        let p = pattern();
        let mut overrides = BTreeMap::new();
        overrides.insert(date("2024-01-05"), Shift::Night);
        overrides.insert(date("2024-01-06"), Shift::Afternoon); // same as pattern

        let mut overtime = BTreeMap::new();
        let ot = DailyOvertime::new(Decimal::new(2, 0), Decimal::new(1, 0));
        overtime.insert(date("2024-01-10"), ot);

        let grid = build_month_grid(
            date("2024-01-01"),
            date("2024-01-01"),
            Some(date("2024-01-01")),
            Some(&p),
            &overtime,
            &overrides,
        );

        // January 2024 starts on a Monday, so the grid begins 2023-12-31
        assert_eq!(grid[0].date, date("2023-12-31"));
        assert_eq!(grid[0].effective_shift, Shift::Unassigned);
        assert_eq!(grid[1].effective_shift, Shift::Morning);
        assert!(grid[1].is_today);

        let jan5 = &grid[5];
        assert_eq!(jan5.date, date("2024-01-05"));
        assert_eq!(jan5.effective_shift, Shift::Night);
        assert_eq!(jan5.pattern_shift, Shift::Morning);
        assert!(jan5.is_overridden);

        let jan6 = &grid[6];
        assert_eq!(jan6.effective_shift, Shift::Afternoon);
        assert!(!jan6.is_overridden);

        let jan10 = &grid[10];
        assert_eq!(jan10.date, date("2024-01-10"));
        assert_eq!(jan10.overtime, Some(ot));
        assert!(grid.iter().filter(|d| d.overtime.is_some()).count() == 1);
    }

    #[test]
    fn test_grid_start_for_each_weekday() {
        assert_eq!(grid_start(date("2024-01-15")), Some(date("2023-12-31"))); // Mon start
        assert_eq!(grid_start(date("2024-06-15")), Some(date("2024-05-26"))); // Sat start
        assert_eq!(grid_start(date("2024-09-15")), Some(date("2024-09-01"))); // Sun start
    }

    #[test]
    fn test_grid_window_outside_date_range() {
        // The last month cannot hold six weeks; the first month starts on a Thursday
        assert_eq!(grid_start(NaiveDate::MAX), None);
        assert_eq!(grid_start(NaiveDate::MIN), None);
        assert!(empty_grid_at(NaiveDate::MAX).is_empty());
        assert!(empty_grid_at(NaiveDate::MIN).is_empty());

        let second = NaiveDate::MIN.checked_add_months(chrono::Months::new(1)).unwrap();
        let second_last = NaiveDate::MAX.checked_sub_months(chrono::Months::new(1)).unwrap();
        assert_eq!(empty_grid_at(second).len(), GRID_CELLS);
        assert_eq!(empty_grid_at(second_last).len(), GRID_CELLS);
    }
}
