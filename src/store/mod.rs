//! # Auxiliary Property Store
//!
//! String-keyed per-item metadata (`item id`, `property name`) → `value`, written by
//! filters and the clustering engine and read back later by QC or consensus building.
//!
//! Two interchangeable backends implement [`PropertyStore`]:
//!
//! - [`InMemoryPropertyStore`]: a locked hash map; fastest, memory grows with every
//!   entry.
//! - [`PersistentPropertyStore`]: an LMDB environment in a temporary directory, sized
//!   up front from the expected entry count. Memory stays roughly flat at the cost of
//!   per-access latency, for runs with tens of millions of items.
//!
//! The backend is picked once, by [`open_property_store`], from a [`StoreConfig`].
//! Both backends accept concurrent reads and writes through `&self`.
//!
//! ```rust
//! use mzprep::store::{open_property_store, StoreConfig};
//!
//! let store = open_property_store(&StoreConfig::InMemory)?;
//! store.store_property("spectrum-1", "RT", "1234.5")?;
//! store.store_property("spectrum-1", "comment", "")?;
//!
//! assert_eq!(store.get_property("spectrum-1", "RT")?.as_deref(), Some("1234.5"));
//! assert_eq!(store.get_property("spectrum-1", "comment")?.as_deref(), Some(""));
//! assert_eq!(store.get_property("spectrum-2", "RT")?, None);
//! # Ok::<(), mzprep::store::StoreError>(())
//! ```

mod config;
mod error;
mod key;
mod memory;
mod persistent;


use std::collections::BTreeSet;

use log::info;

pub use config::{PersistentStoreConfig, StoreConfig};
pub use error::StoreError;
pub use memory::InMemoryPropertyStore;
pub use persistent::PersistentPropertyStore;

/// Capability interface shared by every property store backend
pub trait PropertyStore: Send + Sync {
    /// Insert or overwrite the value of `name` for `item_id`
    fn store_property(&self, item_id: &str, name: &str, value: &str) -> Result<(), StoreError>;

    /// Store several `(item_id, name, value)` records; later entries win
    fn store_properties(&self, entries: &[(&str, &str, &str)]) -> Result<(), StoreError> {
        for &(item_id, name, value) in entries {
            self.store_property(item_id, name, value)?;
        }
        Ok(())
    }

    /// Value of `name` for `item_id`, or `None` if it was never stored
    fn get_property(&self, item_id: &str, name: &str) -> Result<Option<String>, StoreError>;

    /// Every property name stored for any item
    fn list_property_names(&self) -> Result<BTreeSet<String>, StoreError>;

    /// Number of stored `(item_id, name)` records
    fn len(&self) -> Result<usize, StoreError>;

    /// True if no record has been stored
    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Release the backend. Idempotent; later operations fail with
    /// [`StoreError::Closed`]. Dropping a store closes it as well.
    fn close(&self) -> Result<(), StoreError>;
}

/// Create the property store backend selected by `config`
pub fn open_property_store(config: &StoreConfig) -> Result<Box<dyn PropertyStore>, StoreError> {
    match config {
        StoreConfig::InMemory => {
            info!("Using in-memory property store");
            Ok(Box::new(InMemoryPropertyStore::new()))
        }
        StoreConfig::Persistent(persistent) => {
            Ok(Box::new(PersistentPropertyStore::open(persistent)?))
        }
    }
}
