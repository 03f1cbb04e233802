//! Saves a validated post.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::EditorMode;
use crate::domain::entities::Post;
use crate::domain::errors::RequestError;
use crate::domain::ports::PostApiPort;

/// Result of a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new post was created.
    Created,
    /// An existing post was updated.
    Updated,
}

impl SubmitOutcome {
    /// Returns the notification title for the outcome.
    #[must_use]
    pub const fn notification_title(self) -> &'static str {
        match self {
            Self::Created => "Post created",
            Self::Updated => "Post updated",
        }
    }
}

/// Creates or updates a post depending on the editor mode.
#[derive(Clone)]
pub struct SubmitPostUseCase {
    api: Arc<dyn PostApiPort>,
}

impl SubmitPostUseCase {
    /// Creates new submit use case.
    #[must_use]
    pub const fn new(api: Arc<dyn PostApiPort>) -> Self {
        Self { api }
    }

    /// Sends `post` to the API. Exactly one of create or update is called.
    ///
    /// # Errors
    /// Returns error if the API rejects the call.
    pub async fn execute(
        &self,
        mode: &EditorMode,
        post: &Post,
    ) -> Result<SubmitOutcome, RequestError> {
        let result = match mode {
            EditorMode::Create => {
                debug!(slug = %post.slug, "Creating post");
                self.api
                    .create_post(post)
                    .await
                    .map(|()| SubmitOutcome::Created)
            }
            EditorMode::Edit { original_slug } => {
                debug!(slug = %post.slug, original = %original_slug, "Updating post");
                self.api
                    .update_post(original_slug, post)
                    .await
                    .map(|()| SubmitOutcome::Updated)
            }
        };

        match &result {
            Ok(outcome) => info!(slug = %post.slug, outcome = ?outcome, "Post saved"),
            Err(e) => warn!(slug = %post.slug, error = %e, "Failed to save post"),
        }

        result
    }
}
