//! In-memory storage.

use std::sync::Mutex;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayPeriodStartDay, ScheduleState};

use super::{StateStore, StoredData};

/// Keeps the serialized record in memory.
///
/// The record goes through the same [`StoredData`] JSON encoding as the file
/// store, so a save followed by a load behaves exactly like a reload from disk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    record: Mutex<Option<String>>,
    default_start_day: PayPeriodStartDay,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a raw JSON record.
    pub fn with_record(json: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(json.into())),
            default_start_day: PayPeriodStartDay::default(),
        }
    }

    /// Returns the raw JSON record last saved, if any.
    pub fn record(&self) -> Option<String> {
        self.record.lock().ok().and_then(|guard| guard.clone())
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> ScheduleState {
        let empty = ScheduleState {
            pay_period_start_day: self.default_start_day,
            ..Default::default()
        };

        let Some(json) = self.record() else {
            return empty;
        };

        match serde_json::from_str::<StoredData>(&json) {
            Ok(record) => record.into_state(self.default_start_day),
            Err(err) => {
                warn!(error = %err, "Stored schedule is malformed, starting empty");
                empty
            }
        }
    }

    fn save(&self, state: &ScheduleState) -> EngineResult<()> {
        let json = serde_json::to_string(&StoredData::from_state(state)).map_err(|e| {
            EngineError::StorageError {
                path: "<memory>".to_string(),
                message: e.to_string(),
            }
        })?;

        let mut guard = self.record.lock().map_err(|_| EngineError::StorageError {
            path: "<memory>".to_string(),
            message: "store lock poisoned".to_string(),
        })?;
        *guard = Some(json);
        Ok(())
    }
}
