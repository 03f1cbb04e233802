//! Application layer with use cases, services, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful UI services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{EditorMode, PostForm};
pub use use_cases::{ListPostsUseCase, LoadPostUseCase, SubmitOutcome, SubmitPostUseCase};
