use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::store::memory::EntityStore;

/// Reads and writes the single snapshot file holding the whole board
/// state. The file mirrors [`EntityStore`] exactly: users, articles,
/// comments (tombstones as `null`) and both id counters.
#[derive(Debug, Clone)]
pub struct SnapshotGateway {
    path: PathBuf,
}

impl SnapshotGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the snapshot. A missing file is not an error: the service
    /// starts from an empty store with counters at 1. An unreadable or
    /// corrupt file is, and fails startup.
    pub fn load(&self) -> Result<Option<EntityStore>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let store = serde_json::from_str(&data)?;
        Ok(Some(store))
    }

    /// Serializes the full store to the snapshot file. Callers treat a
    /// failure as non-fatal: the in-memory state stays authoritative and
    /// the error is only logged.
    pub fn save(&self, store: &EntityStore) -> Result<()> {
        let data = serde_json::to_string_pretty(store)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}
