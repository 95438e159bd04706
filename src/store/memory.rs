use std::collections::{BTreeSet, HashMap};

use parking_lot::RwLock;

use super::{PropertyStore, StoreError};

/// Property store backed by an in-memory map.
///
/// Records are grouped by item id, so `(item_id, name)` pairs can never collide.
#[derive(Debug)]
pub struct InMemoryPropertyStore {
    state: RwLock<Option<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    items: HashMap<String, HashMap<String, String>>,
    names: BTreeSet<String>,
    records: usize,
}

impl InMemoryPropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(Some(MemoryState::default())),
        }
    }
}

impl Default for InMemoryPropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryState {
    fn insert(&mut self, item_id: &str, name: &str, value: &str) {
        let properties = self.items.entry(item_id.to_string()).or_default();
        if properties
            .insert(name.to_string(), value.to_string())
            .is_none()
        {
            self.records += 1;
        }
        if !self.names.contains(name) {
            self.names.insert(name.to_string());
        }
    }
}

impl PropertyStore for InMemoryPropertyStore {
    fn store_property(&self, item_id: &str, name: &str, value: &str) -> Result<(), StoreError> {
        let mut guard = self.state.write();
        let state = guard.as_mut().ok_or(StoreError::Closed)?;
        state.insert(item_id, name, value);
        Ok(())
    }

    fn store_properties(&self, entries: &[(&str, &str, &str)]) -> Result<(), StoreError> {
        let mut guard = self.state.write();
        let state = guard.as_mut().ok_or(StoreError::Closed)?;
        for &(item_id, name, value) in entries {
            state.insert(item_id, name, value);
        }
        Ok(())
    }

    fn get_property(&self, item_id: &str, name: &str) -> Result<Option<String>, StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(state
            .items
            .get(item_id)
            .and_then(|properties| properties.get(name))
            .cloned())
    }

    fn list_property_names(&self) -> Result<BTreeSet<String>, StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(state.names.clone())
    }

    fn len(&self) -> Result<usize, StoreError> {
        let guard = self.state.read();
        let state = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(state.records)
    }

    fn close(&self) -> Result<(), StoreError> {
        self.state.write().take();
        Ok(())
    }
}
