//! Admin post editor screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::{NotificationManager, PostEditor};
use crate::domain::entities::Post;
use crate::domain::errors::{PostField, RequestError};
use crate::domain::ports::NavigatorPort;
use crate::presentation::events::EventHandler;
use crate::presentation::theme::Palette;
use crate::presentation::widgets::{ContentEditor, KeyHints, TextInput};

const HINTS: &[(&str, &str)] = &[
    ("Tab", "next field"),
    ("Ctrl+S", "save"),
    ("Esc", "cancel"),
];

/// Field receiving typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorFocus {
    /// Title input.
    Title,
    /// Slug input.
    Slug,
    /// Content area.
    Content,
}

impl EditorFocus {
    const fn next(self) -> Self {
        match self {
            Self::Title => Self::Slug,
            Self::Slug => Self::Content,
            Self::Content => Self::Title,
        }
    }

    const fn previous(self) -> Self {
        match self {
            Self::Title => Self::Content,
            Self::Slug => Self::Title,
            Self::Content => Self::Slug,
        }
    }

    const fn field(self) -> PostField {
        match self {
            Self::Title => PostField::Title,
            Self::Slug => PostField::Slug,
            Self::Content => PostField::Content,
        }
    }
}

/// Request for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Handled locally.
    None,
    /// Validate and save.
    Submit,
    /// Leave without saving.
    Cancel,
}

/// Form widgets bound to a [`PostEditor`].
pub struct EditorScreen {
    id: u64,
    editor: PostEditor,
    title_input: TextInput,
    slug_input: TextInput,
    content: ContentEditor<'static>,
    focus: EditorFocus,
}

impl EditorScreen {
    /// Mounts a new editor on the navigator's current route.
    ///
    /// `id` tags the requests this editor starts so that late results can
    /// be matched against the mounted instance.
    #[must_use]
    pub fn mount(id: u64, navigator: &dyn NavigatorPort) -> Self {
        let mut screen = Self {
            id,
            editor: PostEditor::mount(navigator),
            title_input: TextInput::new(" Title "),
            slug_input: TextInput::new(" Slug "),
            content: ContentEditor::new(" Content "),
            focus: EditorFocus::Title,
        };
        screen.set_focus(EditorFocus::Title);
        screen
    }

    /// Mount generation of this editor.
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Form state.
    #[must_use]
    pub const fn editor(&self) -> &PostEditor {
        &self.editor
    }

    /// Mutable form state.
    pub fn editor_mut(&mut self) -> &mut PostEditor {
        &mut self.editor
    }

    /// Focused field.
    #[must_use]
    pub const fn focus(&self) -> EditorFocus {
        self.focus
    }

    /// Applies the initial fetch and refreshes the inputs.
    pub fn finish_fetch(
        &mut self,
        result: Result<Post, RequestError>,
        notifications: &mut NotificationManager,
    ) {
        self.editor.finish_fetch(result, notifications);
        let form = self.editor.form();
        self.title_input.set_value(form.title.as_str());
        self.slug_input.set_value(form.slug.as_str());
        self.content.set_text(&form.content);
    }

    fn set_focus(&mut self, focus: EditorFocus) {
        self.focus = focus;
        self.title_input.set_focused(focus == EditorFocus::Title);
        self.slug_input.set_focused(focus == EditorFocus::Slug);
        self.content.set_focused(focus == EditorFocus::Content);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> EditorAction {
        if EventHandler::is_submit_event(&key) {
            return EditorAction::Submit;
        }

        match key.code {
            KeyCode::Esc => return EditorAction::Cancel,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.previous()),
            KeyCode::Enter if self.focus != EditorFocus::Content => {
                self.set_focus(self.focus.next());
            }
            _ if self.editor.is_fetching() => {}
            _ => self.edit_focused(key),
        }

        EditorAction::None
    }

    fn edit_focused(&mut self, key: KeyEvent) {
        let value = match self.focus {
            EditorFocus::Title => self
                .title_input
                .handle_key(key)
                .then(|| self.title_input.value().to_string()),
            EditorFocus::Slug => self
                .slug_input
                .handle_key(key)
                .then(|| self.slug_input.value().to_string()),
            EditorFocus::Content => self.content.handle_key(key).then(|| self.content.text()),
        };

        if let Some(value) = value {
            self.editor.set_field(self.focus.field(), value);
        }
    }

    /// Draws the form into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let [
            heading,
            title,
            title_error,
            slug,
            slug_error,
            content,
            content_error,
            submit,
            footer,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let mode = self.editor.mode();
        let mut heading_spans = vec![Span::styled(
            format!(" {}", mode.heading()),
            palette.title_style(),
        )];
        if self.editor.is_fetching() {
            heading_spans.push(Span::styled("  Loading post...", palette.muted_style()));
        }
        Paragraph::new(Line::from(heading_spans)).render(heading, buf);

        self.title_input.render(title, buf, palette);
        self.render_error(PostField::Title, title_error, buf, palette);
        self.slug_input.render(slug, buf, palette);
        self.render_error(PostField::Slug, slug_error, buf, palette);
        self.content.render(content, buf, palette);
        self.render_error(PostField::Content, content_error, buf, palette);

        let submit_line = if self.editor.is_loading() {
            Line::from(vec![
                Span::styled(format!(" [ {} ]", mode.submit_label()), palette.muted_style()),
                Span::styled("  Saving...", palette.muted_style()),
            ])
        } else {
            Line::from(Span::styled(
                format!(" [ {} ]", mode.submit_label()),
                palette.border_style(true).add_modifier(Modifier::BOLD),
            ))
        };
        Paragraph::new(submit_line).render(submit, buf);

        KeyHints::new(HINTS, palette).render(footer, buf);
    }

    fn render_error(&self, field: PostField, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if let Some(message) = self.editor.error_for(field) {
            Paragraph::new(Span::styled(format!(" {message}"), palette.error_style()))
                .render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::route::Route;
    use crate::infrastructure::Router;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut EditorScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_updates_focused_field() {
        let mut screen = EditorScreen::mount(1, &Router::new(Route::NewPost));
        type_text(&mut screen, "Hello");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "hello");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "a");
        screen.handle_key(key(KeyCode::Enter));
        type_text(&mut screen, "b");

        let form = screen.editor().form();
        assert_eq!(form.title, "Hello");
        assert_eq!(form.slug, "hello");
        assert_eq!(form.content, "a\nb");
    }

    #[test]
    fn test_focus_cycles() {
        let mut screen = EditorScreen::mount(1, &Router::new(Route::NewPost));
        assert_eq!(screen.focus(), EditorFocus::Title);

        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.focus(), EditorFocus::Content);

        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.focus(), EditorFocus::Title);
    }

    #[test]
    fn test_submit_and_cancel_keys() {
        let mut screen = EditorScreen::mount(1, &Router::new(Route::NewPost));
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        assert_eq!(screen.handle_key(save), EditorAction::Submit);
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), EditorAction::Cancel);
        assert_eq!(screen.editor().form().title, "");
    }

    #[test]
    fn test_fetch_fills_inputs() {
        let router = Router::new(Route::EditPost {
            slug: "hello".into(),
        });
        let mut screen = EditorScreen::mount(7, &router);
        let mut notifications = NotificationManager::default();

        type_text(&mut screen, "ignored");
        assert_eq!(screen.editor().form().title, "");

        screen.finish_fetch(
            Ok(Post::new("Hello", "hello", "line one\nline two")),
            &mut notifications,
        );

        assert_eq!(screen.id(), 7);
        assert_eq!(screen.title_input.value(), "Hello");
        assert_eq!(screen.slug_input.value(), "hello");
        assert_eq!(screen.content.text(), "line one\nline two");

        type_text(&mut screen, "!");
        assert_eq!(screen.editor().form().title, "Hello!");
    }
}
