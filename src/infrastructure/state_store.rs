//! Key-value store adapters for persisted preferences.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::domain::ports::KeyValueStorePort;
use crate::infrastructure::config::StorageManager;

/// Store persisted to `state.toml` in the config directory.
///
/// Values are cached in memory and the whole table is rewritten on
/// every write.
pub struct FileKeyValueStore {
    storage: StorageManager,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Opens the store, starting empty if the state file is unreadable.
    #[must_use]
    pub fn open(storage: StorageManager) -> Self {
        let values = storage.load_state().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load state file, starting empty");
            BTreeMap::new()
        });
        debug!(dir = %storage.config_dir().display(), entries = values.len(), "State store opened");

        Self {
            storage,
            values: Mutex::new(values),
        }
    }
}

impl KeyValueStorePort for FileKeyValueStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());

        if let Err(e) = self.storage.save_state(&values) {
            warn!(key = %key, error = %e, "Failed to persist state");
        }
    }
}

/// Store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorePort for MemoryKeyValueStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values.lock().insert(key.to_string(), value.to_string());
    }
}
