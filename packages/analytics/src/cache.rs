//! Get-or-compute memo for augmented tables.
//!
//! Augmentation is referentially transparent, so its result can be
//! cached by source content identity and shared read-only across every
//! filter call of a session. The key is the data source's fingerprint
//! (`population_atlas_dataset::fingerprint`) and never includes any
//! per-session filter state.

use std::collections::BTreeMap;
use std::sync::Arc;

use population_atlas_dataset_models::AugmentedRecord;

/// Content-keyed cache of augmented tables.
///
/// Entries are `Arc`-shared: callers hold an immutable table while the
/// cache stays free to drop its own reference on invalidation.
#[derive(Debug, Default)]
pub struct AugmentCache {
    entries: BTreeMap<String, Arc<Vec<AugmentedRecord>>>,
}

impl AugmentCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the cached table for `key`, computing and storing it via
    /// `compute` on a miss.
    pub fn get_or_compute<F>(&mut self, key: &str, compute: F) -> Arc<Vec<AugmentedRecord>>
    where
        F: FnOnce() -> Vec<AugmentedRecord>,
    {
        if let Some(table) = self.entries.get(key) {
            log::debug!("Augment cache hit for {key}");
            return Arc::clone(table);
        }

        log::debug!("Augment cache miss for {key}, computing");
        let table = Arc::new(compute());
        self.entries.insert(key.to_owned(), Arc::clone(&table));
        table
    }

    /// Drops the entry for `key`, forcing recomputation on next access.
    /// Used when the data source changes under the same location.
    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no tables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
