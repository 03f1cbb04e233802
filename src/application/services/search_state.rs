//! Search box state.

/// Latest text typed into the search box.
///
/// The query is only held; nothing filters on it yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    query: String,
}

impl SearchState {
    /// Starts with an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the latest input text.
    pub fn on_change(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Latest text typed into the box.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}
