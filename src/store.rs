//! Data store
//!
//! In-memory string map behind a RwLock. Nothing is persisted.

use std::collections::HashMap;

use parking_lot::RwLock;

/// In-memory key-value map
#[derive(Debug, Default)]
pub struct DataStore {
    data: RwLock<HashMap<String, String>>,
}

impl DataStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key (read lock)
    pub fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    /// Set a key-value pair, replacing any previous value (write lock)
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.data.write().insert(key.into(), value.into());
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}
