use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use heed3::types::{Str, Unit};
use heed3::{Database, Env, EnvFlags, EnvOpenOptions};
use log::{info, warn};
use parking_lot::RwLock;
use tempfile::TempDir;

use super::key::{name_from_key, name_key, record_key};
use super::{PersistentStoreConfig, PropertyStore, StoreError};

const PROPERTIES_DB: &str = "properties";
const NAMES_DB: &str = "names";
const TEMP_PREFIX: &str = "mzprep-properties-";

/// Property store backed by an LMDB environment in a temporary directory.
///
/// The memory map is sized once, at construction, from [`PersistentStoreConfig`].
/// Writing past that size fails with [`StoreError::BackendError`]. LMDB lets readers
/// run alongside a single writer; concurrent writers queue inside LMDB.
///
/// The directory is removed on [`close`](PropertyStore::close) or drop. Removal is
/// best effort: failures are logged, and a crashed process leaves the directory
/// behind.
///
/// Keys are limited by LMDB to 511 bytes after encoding.
pub struct PersistentPropertyStore {
    state: RwLock<Option<LmdbState>>,
    path: PathBuf,
    map_size: usize,
}

struct LmdbState {
    env: Env,
    properties: Database<Str, Str>,
    names: Database<Str, Unit>,
    dir: TempDir,
}

impl PersistentPropertyStore {
    /// Create a fresh store sized by `config`
    pub fn open(config: &PersistentStoreConfig) -> Result<Self, StoreError> {
        if config.max_entries == 0 {
            return Err(StoreError::InvalidConfig(
                "max_entries must be greater than zero".to_string(),
            ));
        }

        let mut builder = tempfile::Builder::new();
        builder.prefix(TEMP_PREFIX);
        let dir = match &config.directory {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                builder.tempdir_in(parent)?
            }
            None => builder.tempdir()?,
        };

        let map_size = config.map_size();
        // SAFETY: the environment lives in a freshly created private directory that
        // nothing else opens, and it is opened exactly once. The store is discarded
        // with the process, so commits skip fsync.
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(map_size)
                .max_dbs(2)
                .flags(EnvFlags::NO_SYNC | EnvFlags::NO_META_SYNC)
                .open(dir.path())?
        };

        let mut wtxn = env.write_txn()?;
        let properties: Database<Str, Str> = env.create_database(&mut wtxn, Some(PROPERTIES_DB))?;
        let names: Database<Str, Unit> = env.create_database(&mut wtxn, Some(NAMES_DB))?;
        wtxn.commit()?;

        let path = dir.path().to_path_buf();
        info!(
            "Opened persistent property store at {} ({} entries, {} MiB map)",
            path.display(),
            config.max_entries,
            map_size / (1024 * 1024)
        );

        Ok(Self {
            state: RwLock::new(Some(LmdbState {
                env,
                properties,
                names,
                dir,
            })),
            path,
            map_size,
        })
    }

    /// Directory holding the LMDB files
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the LMDB memory map in bytes
    pub fn map_size(&self) -> usize {
        self.map_size
    }
}

impl LmdbState {
    fn shutdown(self) {
        let LmdbState { env, dir, .. } = self;
        env.prepare_for_closing().wait();

        let path = dir.path().to_path_buf();
        if let Err(e) = dir.close() {
            warn!(
                "Failed to remove property store directory {}: {}",
                path.display(),
                e
            );
        }
    }
}

impl PropertyStore for PersistentPropertyStore {
    fn store_property(&self, item_id: &str, name: &str, value: &str) -> Result<(), StoreError> {
        self.store_properties(&[(item_id, name, value)])
    }

    fn store_properties(&self, entries: &[(&str, &str, &str)]) -> Result<(), StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;

        let mut wtxn = state.env.write_txn()?;
        for &(item_id, name, value) in entries {
            let key = record_key(item_id, name);
            state.properties.put(&mut wtxn, key.as_str(), value)?;
            state.names.put(&mut wtxn, name_key(name).as_str(), &())?;
        }
        wtxn.commit()?;
        Ok(())
    }

    fn get_property(&self, item_id: &str, name: &str) -> Result<Option<String>, StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;

        let key = record_key(item_id, name);
        let rtxn = state.env.read_txn()?;
        let value = state.properties.get(&rtxn, key.as_str())?.map(str::to_string);
        Ok(value)
    }

    fn list_property_names(&self) -> Result<BTreeSet<String>, StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;

        let rtxn = state.env.read_txn()?;
        let mut names = BTreeSet::new();
        for entry in state.names.iter(&rtxn)? {
            let (key, ()) = entry?;
            names.insert(name_from_key(key).to_string());
        }
        Ok(names)
    }

    fn len(&self) -> Result<usize, StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;

        let rtxn = state.env.read_txn()?;
        let records = state.properties.len(&rtxn)?;
        Ok(records as usize)
    }

    fn close(&self) -> Result<(), StoreError> {
        if let Some(state) = self.state.write().take() {
            info!("Closing persistent property store at {}", self.path.display());
            state.shutdown();
        }
        Ok(())
    }
}

impl Drop for PersistentPropertyStore {
    fn drop(&mut self) {
        if let Some(state) = self.state.get_mut().take() {
            state.shutdown();
        }
    }
}
