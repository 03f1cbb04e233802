//! Persisted light/dark preference.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::ThemeMode;
use crate::domain::ports::KeyValueStorePort;

/// Store key holding the theme flag.
pub const THEME_KEY: &str = "theme";

/// Theme flag backed by the local key-value store.
pub struct ThemeService {
    mode: ThemeMode,
    store: Arc<dyn KeyValueStorePort>,
}

impl ThemeService {
    /// Reads the persisted flag once, defaulting to light.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStorePort>) -> Self {
        let mode = store
            .read(THEME_KEY)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_default();
        debug!(mode = %mode, "Theme loaded");

        Self { mode, store }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and persists it.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.store.write(THEME_KEY, self.mode.as_str());
        debug!(mode = %self.mode, "Theme toggled");
        self.mode
    }
}
