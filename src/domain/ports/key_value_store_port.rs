//! Local key-value store port definition.

/// Port for small persisted preferences.
///
/// Writes are infallible from the caller's point of view; adapters log
/// failures instead of returning them.
pub trait KeyValueStorePort: Send + Sync {
    /// Reads the value stored under `key`.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn write(&self, key: &str, value: &str);
}
