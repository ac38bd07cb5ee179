//! JSON file storage.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriodStartDay, ScheduleState};

use super::{StateStore, StoredData};

/// Stores the schedule as a pretty-printed JSON [`StoredData`] file.
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a failed write never leaves a truncated record behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    default_start_day: PayPeriodStartDay,
}

impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>, default_start_day: PayPeriodStartDay) -> Self {
        Self {
            path: path.into(),
            default_start_day,
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn empty_state(&self) -> ScheduleState {
        ScheduleState {
            pay_period_start_day: self.default_start_day,
            ..Default::default()
        }
    }

    fn storage_error(&self, message: impl ToString) -> EngineError {
        EngineError::StorageError {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> ScheduleState {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored schedule, starting empty");
                return self.empty_state();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Failed to read stored schedule");
                return self.empty_state();
            }
        };

        match serde_json::from_str::<StoredData>(&content) {
            Ok(record) => record.into_state(self.default_start_day),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "Stored schedule is malformed, starting empty");
                self.empty_state()
            }
        }
    }

    fn save(&self, state: &ScheduleState) -> EngineResult<()> {
        let json = serde_json::to_string_pretty(&StoredData::from_state(state))
            .map_err(|e| self.storage_error(e))?;

        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, json).map_err(|e| self.storage_error(e))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            self.storage_error(e)
        })?;

        debug!(path = %self.path.display(), "Saved schedule");
        Ok(())
    }
}
