//! Persistence for the schedule state.
//!
//! The engine only needs a narrow load/save interface, [`StateStore`].
//! Loading never fails: a missing or damaged record yields the default,
//! unconfigured schedule. Saving reports failures so callers can keep their
//! in-memory state consistent with what was actually written.

mod file;
mod memory;
mod record;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{StoredData, StoredOverrides};

use crate::error::EngineResult;
use crate::models::ScheduleState;

/// A place the schedule state is read from at startup and written to on every change.
pub trait StateStore: Send + Sync {
    /// Loads the stored schedule, or the default schedule if nothing usable is stored.
    fn load(&self) -> ScheduleState;

    /// Replaces the stored schedule.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::StorageError`] if the write fails.
    fn save(&self, state: &ScheduleState) -> EngineResult<()>;
}
