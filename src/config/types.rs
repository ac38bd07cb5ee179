//! Configuration types for the schedule service.
//!
//! [`SettingsFile`] mirrors the YAML file as written; [`AppConfig`] is the
//! validated form the rest of the crate uses.

use std::path::PathBuf;

use serde::Deserialize;

use crate::models::PayPeriodStartDay;

/// Storage file used when the settings do not name one.
pub const DEFAULT_STORAGE_PATH: &str = "shift-schedule.json";

/// The settings file structure, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Where the schedule state is persisted.
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
    /// Pay period start day for stored records that do not carry one.
    #[serde(default)]
    pub default_pay_period_start_day: Option<i64>,
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the schedule state is persisted.
    pub storage_path: PathBuf,
    /// Pay period start day for stored records that do not carry one.
    pub default_pay_period_start_day: PayPeriodStartDay,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            default_pay_period_start_day: PayPeriodStartDay::default(),
        }
    }
}
