//! Post editor form data.

use crate::domain::entities::Post;
use crate::domain::errors::{FieldError, PostField, ValidationErrors};

/// Whether the editor creates a new post or updates an existing one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorMode {
    /// Creating a post.
    #[default]
    Create,
    /// Updating the post stored under `original_slug`.
    Edit {
        /// Slug the post was loaded with.
        original_slug: String,
    },
}

impl EditorMode {
    /// Returns whether an existing post is being edited.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    /// Returns the editor heading.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Create Post",
            Self::Edit { .. } => "Edit Post",
        }
    }

    /// Returns the submit control label.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create Post",
            Self::Edit { .. } => "Update Post",
        }
    }
}

/// Unvalidated editor input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostForm {
    /// Title input.
    pub title: String,
    /// Slug input.
    pub slug: String,
    /// Content input.
    pub content: String,
}

impl PostForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of `field`.
    #[must_use]
    pub fn get(&self, field: PostField) -> &str {
        match field {
            PostField::Title => &self.title,
            PostField::Slug => &self.slug,
            PostField::Content => &self.content,
        }
    }

    /// Replaces the value of `field`.
    pub fn set(&mut self, field: PostField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PostField::Title => self.title = value,
            PostField::Slug => self.slug = value,
            PostField::Content => self.content = value,
        }
    }

    /// Checks the schema and converts into a post.
    ///
    /// Every field must be a non-empty string. Whitespace counts as content.
    ///
    /// # Errors
    /// Returns one error per empty field, in form order.
    pub fn validate(&self) -> Result<Post, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in PostField::ALL {
            if self.get(field).is_empty() {
                errors.push(FieldError::required(field));
            }
        }

        if errors.is_empty() {
            Ok(Post::new(&self.title, &self.slug, &self.content))
        } else {
            Err(errors)
        }
    }
}

impl From<Post> for PostForm {
    fn from(post: Post) -> Self {
        Self {
            title: post.title,
            slug: post.slug,
            content: post.content,
        }
    }
}
