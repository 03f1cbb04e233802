//! Post API port definition.

use async_trait::async_trait;

use crate::domain::entities::Post;
use crate::domain::errors::RequestError;

/// Port for the remote blog post API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostApiPort: Send + Sync {
    /// Lists every post.
    async fn list_posts(&self) -> Result<Vec<Post>, RequestError>;

    /// Fetches a single post by slug.
    async fn get_post(&self, slug: &str) -> Result<Post, RequestError>;

    /// Creates a new post.
    async fn create_post(&self, post: &Post) -> Result<(), RequestError>;

    /// Replaces the post currently stored under `original_slug`.
    async fn update_post(&self, original_slug: &str, post: &Post) -> Result<(), RequestError>;
}
