//! Shift Rotation Engine
//!
//! This crate projects a repeating shift rotation onto calendar months, applies
//! per-day manual overrides, records overtime hours per day, and aggregates those
//! hours into a two-month-lagged pay period.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
