use serde::{Deserialize, Serialize};

/// A blog article as exchanged with the post API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Post {
    /// Headline shown in listings.
    pub title: String,
    /// URL-safe identifier.
    pub slug: String,
    /// Body text.
    pub content: String,
}

impl Post {
    /// Creates a post from its three fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            content: content.into(),
        }
    }

    /// Returns the first line of the content, used as a listing excerpt.
    #[must_use]
    pub fn excerpt(&self) -> &str {
        self.content.lines().next().unwrap_or_default()
    }
}
