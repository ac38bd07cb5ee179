//! Configuration loading for the Shift Rotation Engine.
//!
//! Settings live in a small YAML file naming where the schedule state is
//! stored and which pay period start day to assume for records without one.
//!
//! # Example
//!
//! ```no_run
//! use shift_rotation_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./settings.yaml").unwrap();
//! println!("Schedule stored at: {}", config.storage_path().display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_STORAGE_PATH, SettingsFile};
