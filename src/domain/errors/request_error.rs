//! Post API request error types.

use thiserror::Error;

/// Failure of a call to the post API.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum RequestError {
    #[error("{message}")]
    Network { message: String },

    #[error("post not found: {slug}")]
    NotFound { slug: String },

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("failed to read response: {message}")]
    Decode { message: String },

    #[error("{message}")]
    Unexpected { message: String },
}

impl RequestError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound { slug: slug.into() }
    }

    /// Creates rejected error.
    #[must_use]
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// Creates decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns the text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the HTTP status when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::NotFound { .. } => Some(404),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_is_server_text() {
        let err = RequestError::rejected(409, "slug already exists");
        assert_eq!(err.message(), "slug already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_not_found_message() {
        let err = RequestError::not_found("missing");
        assert_eq!(err.message(), "post not found: missing");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_network_has_no_status() {
        assert_eq!(RequestError::network("request timed out").status(), None);
    }
}
