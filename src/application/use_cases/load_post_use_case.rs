//! Loads a post for editing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Post;
use crate::domain::errors::RequestError;
use crate::domain::ports::PostApiPort;

/// Fetches an existing post by slug.
#[derive(Clone)]
pub struct LoadPostUseCase {
    api: Arc<dyn PostApiPort>,
}

impl LoadPostUseCase {
    /// Creates new load use case.
    #[must_use]
    pub const fn new(api: Arc<dyn PostApiPort>) -> Self {
        Self { api }
    }

    /// Fetches the post stored under `slug`.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn execute(&self, slug: &str) -> Result<Post, RequestError> {
        debug!(slug = %slug, "Fetching post");

        self.api.get_post(slug).await.map_err(|e| {
            warn!(slug = %slug, error = %e, "Failed to fetch post");
            e
        })
    }
}
