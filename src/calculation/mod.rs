//! Calculation logic for the Shift Rotation Engine.
//!
//! This module contains the pure functions that derive everything the
//! presentation layer shows: canonical date keys and month arithmetic, shift
//! projection from the rotation pattern, the fixed six-week month grid, and
//! the two-month-lagged pay period summary. None of them fail or mutate
//! their inputs.

mod date_key;
mod month_grid;
mod pay_period_summary;
mod shift_projection;

pub use date_key::{date_key, first_of_month, parse_date_key, shift_month};
pub use month_grid::{GRID_CELLS, build_month_grid, describe_day, grid_start};
pub use pay_period_summary::{pay_period_bounds, summarize_period};
pub use shift_projection::{ShiftResolution, effective_shift, project_shift, resolve_shift};
