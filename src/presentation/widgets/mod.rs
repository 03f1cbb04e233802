mod comment_list;
mod content_editor;
mod input;
mod key_hints;
mod theme_toggle;

pub use comment_list::CommentList;
pub use content_editor::ContentEditor;
pub use input::TextInput;
pub use key_hints::KeyHints;
pub use theme_toggle::ThemeToggle;
