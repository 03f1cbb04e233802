//! Domain entity definitions.

mod comment;
mod post;
mod theme;

pub use comment::{ANONYMOUS_AUTHOR, Comment, CommentId};
pub use post::Post;
pub use theme::ThemeMode;
