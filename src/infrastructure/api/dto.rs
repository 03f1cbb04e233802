//! Post API wire types.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Post;

/// Error body returned by the API.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub message: String,
}

/// Post representation on the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostPayload {
    /// Title.
    pub title: String,
    /// Slug.
    pub slug: String,
    /// Body.
    pub content: String,
}

impl From<&Post> for PostPayload {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
        }
    }
}

impl From<PostPayload> for Post {
    fn from(payload: PostPayload) -> Self {
        Self::new(payload.title, payload.slug, payload.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_three_fields() {
        let post = Post::new("Hello", "hello", "Body");
        let json = serde_json::to_value(PostPayload::from(&post)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "title": "Hello", "slug": "hello", "content": "Body" })
        );
    }

    #[test]
    fn test_error_response_parses_message() {
        let body: ErrorResponse =
            serde_json::from_str(r#"{"message":"slug taken","code":"conflict"}"#).unwrap();
        assert_eq!(body.message, "slug taken");
    }
}
