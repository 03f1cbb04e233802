//! Reader screen hosting the client widgets.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::services::{CommentPanel, SearchState};
use crate::presentation::theme::Palette;
use crate::presentation::widgets::{CommentList, KeyHints, TextInput, ThemeToggle};

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("t", "theme"),
    ("/", "search"),
    ("c", "comments"),
    ("i", "write"),
    ("a", "admin"),
    ("q", "quit"),
];
const INPUT_HINTS: &[(&str, &str)] = &[("Enter", "submit"), ("Esc", "leave input")];

/// Input receiving typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderFocus {
    /// Keys are commands.
    None,
    /// Search box.
    Search,
    /// Comment draft.
    Comment,
}

/// Request for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderAction {
    /// Handled locally.
    None,
    /// Flip light/dark.
    ToggleTheme,
    /// Go to the admin listing.
    OpenAdmin,
    /// Leave the app.
    Quit,
}

/// Search box, theme indicator, and comment panel.
pub struct ReaderScreen {
    search_input: TextInput,
    search: SearchState,
    comment_input: TextInput,
    comments: CommentPanel,
    focus: ReaderFocus,
}

impl Default for ReaderScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ReaderScreen {
    /// Creates the view with the comment panel hidden.
    #[must_use]
    pub fn new() -> Self {
        Self {
            search_input: TextInput::new(" Search ").placeholder("Search posts..."),
            search: SearchState::new(),
            comment_input: TextInput::new(" Comment ").placeholder("Write a comment..."),
            comments: CommentPanel::new(),
            focus: ReaderFocus::None,
        }
    }

    /// Currently focused input.
    #[must_use]
    pub const fn focus(&self) -> ReaderFocus {
        self.focus
    }

    /// Search box state.
    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    /// Comment panel state.
    #[must_use]
    pub const fn comments(&self) -> &CommentPanel {
        &self.comments
    }

    fn set_focus(&mut self, focus: ReaderFocus) {
        self.focus = focus;
        self.search_input.set_focused(focus == ReaderFocus::Search);
        self.comment_input.set_focused(focus == ReaderFocus::Comment);
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ReaderAction {
        match self.focus {
            ReaderFocus::Search => self.handle_search_key(key),
            ReaderFocus::Comment => self.handle_comment_key(key),
            ReaderFocus::None => return self.handle_browse_key(key),
        }
        ReaderAction::None
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> ReaderAction {
        match key.code {
            KeyCode::Char('t') => return ReaderAction::ToggleTheme,
            KeyCode::Char('a') => return ReaderAction::OpenAdmin,
            KeyCode::Char('q') => return ReaderAction::Quit,
            KeyCode::Char('/') => self.set_focus(ReaderFocus::Search),
            KeyCode::Char('c') => self.comments.toggle_visibility(),
            KeyCode::Char('i') => {
                if !self.comments.is_visible() {
                    self.comments.toggle_visibility();
                }
                self.set_focus(ReaderFocus::Comment);
            }
            _ => {}
        }
        ReaderAction::None
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.set_focus(ReaderFocus::None),
            _ => {
                if self.search_input.handle_key(key) {
                    self.search.on_change(self.search_input.value());
                }
            }
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_focus(ReaderFocus::None),
            KeyCode::Enter => {
                self.comments.submit_draft();
                self.comment_input.clear();
            }
            _ => {
                if self.comment_input.handle_key(key) {
                    self.comments.set_draft(self.comment_input.value());
                }
            }
        }
    }

    /// Draws the view into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let [header, search, toggle, panel, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        let [title_area, theme_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(header);
        Paragraph::new(Span::styled(" inkwell", palette.title_style())).render(title_area, buf);
        ThemeToggle::new(palette).render(theme_area, buf);

        self.search_input.render(search, buf, palette);

        let marker = if self.comments.is_visible() { "▾" } else { "▸" };
        let count = self.comments.comments().len();
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {marker} Comments"), palette.title_style()),
            Span::styled(format!(" ({count})"), palette.muted_style()),
        ]))
        .render(toggle, buf);

        if self.comments.is_visible() {
            let [input_area, list_area] =
                Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).areas(panel);
            self.comment_input.render(input_area, buf, palette);
            CommentList::new(self.comments.comments(), palette).render(list_area, buf);
        }

        let hints = if self.focus == ReaderFocus::None {
            BROWSE_HINTS
        } else {
            INPUT_HINTS
        };
        KeyHints::new(hints, palette).render(footer, buf);
    }
}
