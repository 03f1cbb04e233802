//! Data transfer objects for the application layer.

mod post_form;

pub use post_form::{EditorMode, PostForm};
