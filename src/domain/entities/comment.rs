use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Author recorded on every comment written from this client.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Identifier of a comment, the creation time in milliseconds since the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub i64);

impl CommentId {
    /// Returns the underlying millisecond timestamp.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A session-local remark attached to the reader view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    text: String,
    author: String,
    date: String,
}

impl Comment {
    /// Creates an anonymous comment stamped with `now`.
    #[must_use]
    pub fn anonymous(text: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: CommentId(now.timestamp_millis()),
            text: text.into(),
            author: ANONYMOUS_AUTHOR.to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Returns comment ID.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns comment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns author name.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the ISO 8601 creation timestamp.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}
