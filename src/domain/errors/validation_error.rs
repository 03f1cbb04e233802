//! Form validation error types.

use thiserror::Error;

/// Post form fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostField {
    /// Post title.
    Title,
    /// Post slug.
    Slug,
    /// Post body.
    Content,
}

impl PostField {
    /// All fields in form order.
    pub const ALL: [Self; 3] = [Self::Title, Self::Slug, Self::Content];

    /// Returns the form label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Slug => "Slug",
            Self::Content => "Content",
        }
    }
}

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Offending field.
    pub field: PostField,
    /// Message displayed beneath the field.
    pub message: String,
}

impl FieldError {
    /// Creates a "required" error for `field`.
    #[must_use]
    pub fn required(field: PostField) -> Self {
        Self {
            field,
            message: format!("{} is required", field.label()),
        }
    }
}

/// Every field error produced by one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records an error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns whether no errors were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for `field`, if it failed.
    #[must_use]
    pub fn message_for(&self, field: PostField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterates over recorded errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_messages() {
        assert_eq!(FieldError::required(PostField::Title).message, "Title is required");
        assert_eq!(FieldError::required(PostField::Slug).message, "Slug is required");
        assert_eq!(
            FieldError::required(PostField::Content).message,
            "Content is required"
        );
    }

    #[test]
    fn test_message_lookup() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::required(PostField::Slug));

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message_for(PostField::Slug), Some("Slug is required"));
        assert_eq!(errors.message_for(PostField::Title), None);
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
    }
}
