//! Stateful services backing the UI components.

mod comment_panel;
mod notification_manager;
mod post_editor;
mod search_state;
mod theme_service;

pub use comment_panel::CommentPanel;
pub use notification_manager::NotificationManager;
pub use post_editor::{PendingSubmit, PostEditor};
pub use search_state::SearchState;
pub use theme_service::{THEME_KEY, ThemeService};
