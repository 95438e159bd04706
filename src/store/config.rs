use std::path::PathBuf;

use serde::Deserialize;

/// Page-size multiple the LMDB map size is rounded up to (covers 4 KiB to 64 KiB pages)
const MAP_SIZE_ALIGNMENT: usize = 64 * 1024;

/// Per-record bookkeeping bytes on top of the key and value
const ENTRY_OVERHEAD: usize = 16;

/// Fixed headroom for the names table and LMDB metadata pages
const BASE_MAP_SIZE: usize = 1024 * 1024;

/// Backend selection for [`open_property_store`](super::open_property_store).
///
/// In TOML the backend is named by a `backend` key:
///
/// ```toml
/// [store]
/// backend = "persistent"
/// max_entries = 50000000
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Unbounded in-memory map
    #[default]
    InMemory,
    /// Disk-backed LMDB store with bounded memory use
    Persistent(PersistentStoreConfig),
}

/// Sizing of the persistent backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PersistentStoreConfig {
    /// Maximum number of records the store must hold
    pub max_entries: usize,

    /// Average `item id` + `property name` length in bytes
    pub avg_key_bytes: usize,

    /// Average value length in bytes
    pub avg_value_bytes: usize,

    /// Parent directory for the temporary store (system temp dir if unset)
    pub directory: Option<PathBuf>,
}

impl Default for PersistentStoreConfig {
    fn default() -> Self {
        Self {
            max_entries: 10_000_000,
            avg_key_bytes: 32,
            avg_value_bytes: 16,
            directory: None,
        }
    }
}

impl PersistentStoreConfig {
    /// Create a configuration sized for `max_entries` records
    pub fn new(max_entries: usize, avg_key_bytes: usize, avg_value_bytes: usize) -> Self {
        Self {
            max_entries,
            avg_key_bytes,
            avg_value_bytes,
            directory: None,
        }
    }

    /// Place the temporary store under `directory`
    pub fn in_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// LMDB map size in bytes.
    ///
    /// B-tree pages are on average half full after splits, so the raw record volume is
    /// doubled before adding fixed headroom and rounding up to [`MAP_SIZE_ALIGNMENT`].
    pub fn map_size(&self) -> usize {
        let per_entry = self
            .avg_key_bytes
            .saturating_add(self.avg_value_bytes)
            .saturating_add(ENTRY_OVERHEAD);
        let raw = self
            .max_entries
            .saturating_mul(per_entry)
            .saturating_mul(2)
            .saturating_add(BASE_MAP_SIZE);
        let rounded = raw.saturating_add(MAP_SIZE_ALIGNMENT - 1);
        rounded - rounded % MAP_SIZE_ALIGNMENT
    }
}
