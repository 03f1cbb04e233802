//! Loads the admin post listing.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::Post;
use crate::domain::errors::RequestError;
use crate::domain::ports::PostApiPort;

/// Fetches every post for the admin listing.
#[derive(Clone)]
pub struct ListPostsUseCase {
    api: Arc<dyn PostApiPort>,
}

impl ListPostsUseCase {
    /// Creates new listing use case.
    #[must_use]
    pub const fn new(api: Arc<dyn PostApiPort>) -> Self {
        Self { api }
    }

    /// Returns posts sorted by title.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn execute(&self) -> Result<Vec<Post>, RequestError> {
        let mut posts = self.api.list_posts().await.map_err(|e| {
            warn!(error = %e, "Failed to list posts");
            e
        })?;

        posts.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        debug!(count = posts.len(), "Posts listed");

        Ok(posts)
    }
}
