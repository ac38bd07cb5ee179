//! Application state for the schedule API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::ScheduleState;
use crate::storage::StateStore;

/// Shared application state.
///
/// Holds the current schedule behind an async lock together with the store
/// it is persisted to.
#[derive(Clone)]
pub struct AppState {
    schedule: Arc<RwLock<ScheduleState>>,
    store: Arc<dyn StateStore>,
}

impl AppState {
    /// Creates application state backed by the JSON file the configuration names.
    pub fn new(config: &ConfigLoader) -> Self {
        Self::with_store(config.open_store())
    }

    /// Creates application state backed by the given store, loading its contents.
    pub fn with_store<S: StateStore + 'static>(store: S) -> Self {
        let schedule = store.load();
        Self {
            schedule: Arc::new(RwLock::new(schedule)),
            store: Arc::new(store),
        }
    }

    /// Returns a copy of the current schedule.
    pub async fn snapshot(&self) -> ScheduleState {
        self.schedule.read().await.clone()
    }

    /// Applies `change` to a copy of the schedule, saves it, and only then
    /// replaces the shared schedule.
    ///
    /// The save runs on the blocking thread pool. Writers stay serialized
    /// behind the lock, so saves land in the order their changes were made.
    /// If `change` or the save fails, the shared schedule is left untouched.
    pub async fn update<F>(&self, change: F) -> EngineResult<ScheduleState>
    where
        F: FnOnce(&mut ScheduleState) -> EngineResult<()>,
    {
        let mut guard = self.schedule.write().await;
        let mut next = guard.clone();
        change(&mut next)?;

        let store = Arc::clone(&self.store);
        let to_save = next.clone();
        tokio::task::spawn_blocking(move || store.save(&to_save))
            .await
            .map_err(|err| EngineError::StorageError {
                path: "<save task>".to_string(),
                message: err.to_string(),
            })??;

        *guard = next.clone();
        Ok(next)
    }
}
