//! Blog post HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, PostPayload};
use crate::domain::entities::Post;
use crate::domain::errors::RequestError;
use crate::domain::ports::PostApiPort;

const USER_AGENT: &str = concat!("inkwell/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// JSON client for the blog's post endpoints.
pub struct HttpPostApi {
    client: Client,
    base_url: Url,
}

impl HttpPostApi {
    /// Creates client for `base_url` with the default timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, RequestError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates client with a custom timeout.
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, RequestError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RequestError::unexpected(format!("invalid API URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RequestError::unexpected(format!(
                "API URL cannot be used as a base: {base_url}"
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RequestError::unexpected(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Builds `{base}/posts[/{slug}]`, encoding the slug as one segment.
    fn posts_url(&self, slug: Option<&str>) -> Result<Url, RequestError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| RequestError::unexpected("API URL cannot be used as a base"))?;
            segments.pop_if_empty().push("posts");
            if let Some(slug) = slug {
                segments.push(slug);
            }
        }
        Ok(url)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<Response, RequestError> {
        request.send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach post API");
            if e.is_timeout() {
                RequestError::network("request timed out")
            } else if e.is_connect() {
                RequestError::network("failed to connect to the blog API")
            } else {
                RequestError::network(e.to_string())
            }
        })
    }

    async fn error_from_response(response: Response, slug: Option<&str>) -> RequestError {
        let status = response.status();
        if status == StatusCode::NOT_FOUND
            && let Some(slug) = slug
        {
            return RequestError::not_found(slug);
        }

        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {status}"),
        };
        RequestError::rejected(status.as_u16(), message)
    }

    async fn expect_success(response: Response, slug: Option<&str>) -> Result<Response, RequestError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response, slug).await)
        }
    }
}

#[async_trait]
impl PostApiPort for HttpPostApi {
    async fn list_posts(&self) -> Result<Vec<Post>, RequestError> {
        let url = self.posts_url(None)?;
        debug!(url = %url, "Listing posts");

        let response = Self::send(self.client.get(url)).await?;
        let response = Self::expect_success(response, None).await?;

        let posts: Vec<PostPayload> = response
            .json()
            .await
            .map_err(|e| RequestError::decode(e.to_string()))?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn get_post(&self, slug: &str) -> Result<Post, RequestError> {
        let url = self.posts_url(Some(slug))?;
        debug!(url = %url, "Fetching post");

        let response = Self::send(self.client.get(url)).await?;
        let response = Self::expect_success(response, Some(slug)).await?;

        let post: PostPayload = response
            .json()
            .await
            .map_err(|e| RequestError::decode(e.to_string()))?;
        Ok(post.into())
    }

    async fn create_post(&self, post: &Post) -> Result<(), RequestError> {
        let url = self.posts_url(None)?;
        debug!(url = %url, slug = %post.slug, "Creating post");

        let request = self.client.post(url).json(&PostPayload::from(post));
        let response = Self::send(request).await?;
        Self::expect_success(response, None).await?;
        Ok(())
    }

    async fn update_post(&self, original_slug: &str, post: &Post) -> Result<(), RequestError> {
        let url = self.posts_url(Some(original_slug))?;
        debug!(url = %url, slug = %post.slug, "Updating post");

        let request = self.client.put(url).json(&PostPayload::from(post));
        let response = Self::send(request).await?;
        Self::expect_success(response, Some(original_slug)).await?;
        Ok(())
    }
}
