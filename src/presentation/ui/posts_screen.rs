//! Admin listing of posts.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::domain::entities::Post;
use crate::presentation::theme::Palette;
use crate::presentation::widgets::KeyHints;

const HINTS: &[(&str, &str)] = &[
    ("↑/↓", "select"),
    ("Enter", "edit"),
    ("n", "new"),
    ("R", "reload"),
    ("Esc", "reader"),
];

/// Request for the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsAction {
    /// Handled locally.
    None,
    /// Open the editor for this slug.
    Edit(String),
    /// Open an empty editor.
    New,
    /// Fetch the list again.
    Reload,
    /// Return to the previous view.
    Back,
    /// Leave the app.
    Quit,
}

/// Post list fed by the API.
pub struct PostsScreen {
    posts: Vec<Post>,
    list_state: ListState,
    loading: bool,
}

impl Default for PostsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl PostsScreen {
    /// Creates a screen waiting for its first load.
    #[must_use]
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            list_state: ListState::default(),
            loading: true,
        }
    }

    /// Whether a listing request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Posts in display order.
    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Marks a reload as started.
    pub fn set_loading(&mut self) {
        self.loading = true;
    }

    /// Replaces the list, keeping the selection in range.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.loading = false;
        self.posts = posts;
        let selected = match self.list_state.selected() {
            _ if self.posts.is_empty() => None,
            Some(i) => Some(i.min(self.posts.len() - 1)),
            None => Some(0),
        };
        self.list_state.select(selected);
    }

    /// Highlighted post.
    #[must_use]
    pub fn selected(&self) -> Option<&Post> {
        self.list_state.selected().and_then(|i| self.posts.get(i))
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> PostsAction {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.list_state.selected() {
                    self.list_state.select(Some(i.saturating_sub(1)));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.list_state.selected()
                    && i + 1 < self.posts.len()
                {
                    self.list_state.select(Some(i + 1));
                }
            }
            KeyCode::Enter => {
                if let Some(post) = self.selected() {
                    return PostsAction::Edit(post.slug.clone());
                }
            }
            KeyCode::Char('n') => return PostsAction::New,
            KeyCode::Char('R') => return PostsAction::Reload,
            KeyCode::Esc => return PostsAction::Back,
            KeyCode::Char('q') => return PostsAction::Quit,
            _ => {}
        }
        PostsAction::None
    }

    /// Draws the list into `area`.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style(true))
            .title(Span::styled(" Posts ", palette.title_style()));

        if self.loading || self.posts.is_empty() {
            let text = if self.loading {
                "Loading posts..."
            } else {
                "No posts yet. Press n to write one."
            };
            Paragraph::new(Span::styled(text, palette.muted_style()))
                .block(block)
                .render(body, buf);
        } else {
            let items: Vec<ListItem> = self
                .posts
                .iter()
                .map(|post| {
                    ListItem::new(Line::from(vec![
                        Span::raw(post.title.as_str()),
                        Span::styled(format!("  /{}", post.slug), palette.muted_style()),
                        Span::styled(format!("  {}", post.excerpt()), palette.muted_style()),
                    ]))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_symbol("> ")
                .highlight_style(
                    palette
                        .border_style(true)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED),
                );
            StatefulWidget::render(list, body, buf, &mut self.list_state);
        }

        KeyHints::new(HINTS, palette).render(footer, buf);
    }
}
