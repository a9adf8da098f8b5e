//! Process-wide snapshot caching.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use vitals_model::Snapshot;

use crate::error::Result;
use crate::workbook::load_workbook;

/// Explicit, injectable holder for the loaded snapshot.
///
/// The workbook is read at most once per process unless the cache is
/// explicitly invalidated or refreshed; there is no time- or size-based
/// expiry. `refresh` swaps the `Arc` in a single write, so in-flight readers
/// keep the snapshot they already hold and never observe a partially updated
/// table. Load errors are returned to the caller and never cached.
#[derive(Debug)]
pub struct SnapshotCache {
    path: PathBuf,
    slot: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            slot: RwLock::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Currently cached snapshot, without triggering a load.
    pub fn get(&self) -> Option<Arc<Snapshot>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the cached snapshot, loading the workbook on first use.
    pub fn get_or_load(&self) -> Result<Arc<Snapshot>> {
        if let Some(snapshot) = self.get() {
            return Ok(snapshot);
        }
        self.refresh()
    }

    /// Re-reads the workbook and atomically swaps the cached snapshot.
    pub fn refresh(&self) -> Result<Arc<Snapshot>> {
        let snapshot = Arc::new(load_workbook(&self.path)?);
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drops the cached snapshot; the next `get_or_load` re-reads the file.
    pub fn invalidate(&self) {
        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            info!(path = %self.path.display(), "snapshot cache invalidated");
        }
    }
}
