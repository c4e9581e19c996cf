//! Injected key-value storage for plugin settings.
//!
//! The host owns persistence; the adapter only sees this interface. A
//! forum typically backs it with its plugin-store table, while tests and
//! embedded uses can rely on [`MemoryStore`].

use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;

/// Key-value store the host injects into the adapter.
pub trait PluginStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: Value);

    /// Removes the value stored under `key`.
    fn remove(&self, key: &str);
}

/// In-memory [`PluginStore`] implementation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PluginStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(key);
        }
    }
}
