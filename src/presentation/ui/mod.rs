//! UI screens.

mod app;
mod editor_screen;
mod notification_popup;
mod posts_screen;
mod reader_screen;

pub use app::App;
pub use editor_screen::{EditorAction, EditorFocus, EditorScreen};
pub use notification_popup::NotificationPopup;
pub use posts_screen::{PostsAction, PostsScreen};
pub use reader_screen::{ReaderAction, ReaderFocus, ReaderScreen};
