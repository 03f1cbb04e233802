//! Use case implementations.

mod list_posts_use_case;
mod load_post_use_case;
mod submit_post_use_case;

pub use list_posts_use_case::ListPostsUseCase;
pub use load_post_use_case::LoadPostUseCase;
pub use submit_post_use_case::{SubmitOutcome, SubmitPostUseCase};
