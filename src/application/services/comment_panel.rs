//! In-memory comment panel.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::entities::Comment;

/// Comment list and draft for the current session. Nothing is persisted.
#[derive(Debug, Default)]
pub struct CommentPanel {
    visible: bool,
    draft: String,
    comments: Vec<Comment>,
}

impl CommentPanel {
    /// Hidden panel without comments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the panel is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Shows or hides the panel.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Text in the comment input.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the input text.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Comments in the order they were written.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Appends `text` as an anonymous comment and clears the draft.
    pub fn submit_comment(&mut self, text: impl Into<String>) -> &Comment {
        self.submit_comment_at(text, Utc::now())
    }

    /// Submits whatever is in the draft.
    pub fn submit_draft(&mut self) -> &Comment {
        let text = std::mem::take(&mut self.draft);
        self.submit_comment(text)
    }

    pub(crate) fn submit_comment_at(
        &mut self,
        text: impl Into<String>,
        now: DateTime<Utc>,
    ) -> &Comment {
        let comment = Comment::anonymous(text, now);
        debug!(id = %comment.id(), "Comment added");
        self.draft.clear();
        self.comments.push(comment);
        &self.comments[self.comments.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_starts_hidden_and_empty() {
        let panel = CommentPanel::new();
        assert!(!panel.is_visible());
        assert!(panel.comments().is_empty());
    }

    #[test]
    fn test_toggle_visibility() {
        let mut panel = CommentPanel::new();
        panel.toggle_visibility();
        assert!(panel.is_visible());
        panel.toggle_visibility();
        assert!(!panel.is_visible());
    }

    #[test]
    fn test_submit_appends_to_end_and_clears_draft() {
        let mut panel = CommentPanel::new();
        let earlier = Utc::now() - Duration::seconds(5);
        panel.submit_comment_at("first", earlier);

        panel.set_draft("hello");
        panel.submit_draft();

        assert_eq!(panel.comments().len(), 2);
        let last = panel.comments().last().unwrap();
        assert_eq!(last.text(), "hello");
        assert_eq!(last.author(), "Anonymous");
        assert_eq!(panel.comments()[0].text(), "first");
        assert!(panel.draft().is_empty());
    }

    #[test]
    fn test_empty_text_is_accepted() {
        let mut panel = CommentPanel::new();
        panel.submit_comment("");
        assert_eq!(panel.comments().len(), 1);
        assert_eq!(panel.comments()[0].text(), "");
    }

    #[test]
    fn test_ids_follow_submission_time() {
        let mut panel = CommentPanel::new();
        let now = Utc::now();
        let id = panel.submit_comment_at("a", now).id();
        assert_eq!(id.as_millis(), now.timestamp_millis());
    }
}
