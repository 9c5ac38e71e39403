// src/snapshot/cache.rs
//! Read-through snapshot cache.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use super::load::{fingerprint, load_path};
use super::Snapshot;
use crate::error::Result;

/// Loaded snapshots keyed by content fingerprint.
///
/// Constructed explicitly and passed to whoever needs it. Reloading unchanged
/// data returns the same `Arc`; [`SnapshotCache::clear`] drops everything.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    entries: RwLock<HashMap<String, Arc<Snapshot>>>,
}

impl SnapshotCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached snapshot for the data at `path`, loading it on a miss.
    ///
    /// # Errors
    /// Returns error if the data cannot be fingerprinted or loaded.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<Snapshot>> {
        let key = fingerprint(path)?;
        if let Some(hit) = self.get(&key) {
            tracing::debug!(key = %short(&key), "snapshot cache hit");
            return Ok(hit);
        }
        let snapshot = Arc::new(load_path(path)?);
        tracing::debug!(key = %short(&key), "snapshot cache miss, loaded");
        Ok(self.insert(key, snapshot))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<Snapshot>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Stores `snapshot` under `key` unless another caller got there first;
    /// returns whichever is cached.
    pub fn insert(&self, key: String, snapshot: Arc<Snapshot>) -> Arc<Snapshot> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(snapshot))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

fn short(key: &str) -> &str {
    key.get(..12).unwrap_or(key)
}
