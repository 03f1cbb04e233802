//! Infrastructure layer with external service adapters.

/// Blog post HTTP API client.
pub mod api;
/// Application configuration.
pub mod config;
/// In-app navigation.
pub mod router;
/// Persisted key-value state.
pub mod state_store;

pub use api::HttpPostApi;
pub use config::{AppConfig, CliArgs, LogLevel, StorageManager};
pub use router::Router;
pub use state_store::{FileKeyValueStore, MemoryKeyValueStore};
