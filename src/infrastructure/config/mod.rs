//! Application configuration.

/// Settings model.
pub mod app_config;
/// Command line flags.
pub mod args;
/// Config directory access.
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, LogLevel, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
