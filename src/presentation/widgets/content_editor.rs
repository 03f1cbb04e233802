//! Multi-line editor for post content.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tui_textarea::{CursorMove, TextArea};

use crate::presentation::theme::Palette;

/// Editing buffer rendered as a bordered block.
pub struct ContentEditor<'a> {
    textarea: TextArea<'a>,
    focused: bool,
    label: String,
}

impl ContentEditor<'_> {
    /// Creates an empty editor titled `label`.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            textarea: TextArea::default(),
            focused: false,
            label: label.into(),
        }
    }

    /// Sets focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Returns focus state.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Returns the buffer joined with newlines.
    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Replaces the buffer and puts the cursor at the top.
    pub fn set_text(&mut self, content: &str) {
        self.textarea = TextArea::from(content.split('\n'));
    }

    /// Applies an editing key. Returns whether the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let ctrl_or_alt = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(c) if !ctrl_or_alt => {
                self.textarea.insert_char(c);
                true
            }
            KeyCode::Enter => {
                self.textarea.insert_newline();
                true
            }
            KeyCode::Backspace => self.textarea.delete_char(),
            KeyCode::Delete => self.textarea.delete_next_char(),
            KeyCode::Left => {
                self.textarea.move_cursor(CursorMove::Back);
                false
            }
            KeyCode::Right => {
                self.textarea.move_cursor(CursorMove::Forward);
                false
            }
            KeyCode::Up => {
                self.textarea.move_cursor(CursorMove::Up);
                false
            }
            KeyCode::Down => {
                self.textarea.move_cursor(CursorMove::Down);
                false
            }
            KeyCode::Home => {
                self.textarea.move_cursor(CursorMove::Head);
                false
            }
            KeyCode::End => {
                self.textarea.move_cursor(CursorMove::End);
                false
            }
            _ => false,
        }
    }

    /// Renders the visible window of lines around the cursor.
    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style(self.focused))
            .title(self.label.as_str());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let (cursor_row, cursor_col) = self.textarea.cursor();
        let height = usize::from(inner.height);
        let first_row = cursor_row.saturating_sub(height - 1);

        let lines: Vec<Line> = self
            .textarea
            .lines()
            .iter()
            .enumerate()
            .skip(first_row)
            .take(height)
            .map(|(row, text)| {
                if self.focused && row == cursor_row {
                    cursor_line(text, cursor_col, palette)
                } else {
                    Line::from(text.as_str())
                }
            })
            .collect();

        Paragraph::new(lines)
            .style(palette.base_style())
            .render(inner, buf);
    }
}

fn cursor_line<'a>(text: &'a str, cursor_col: usize, palette: &Palette) -> Line<'a> {
    let split = text
        .char_indices()
        .nth(cursor_col)
        .map_or(text.len(), |(i, _)| i);
    let (before, rest) = text.split_at(split);
    let mut chars = rest.chars();
    let under_cursor = chars.next().map_or_else(|| " ".to_string(), String::from);

    Line::from(vec![
        Span::raw(before),
        Span::styled(under_cursor, palette.cursor_style()),
        Span::raw(chars.as_str()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_newlines() {
        let mut editor = ContentEditor::new("Content");
        editor.handle_key(key(KeyCode::Char('a')));
        editor.handle_key(key(KeyCode::Enter));
        editor.handle_key(key(KeyCode::Char('b')));

        assert_eq!(editor.text(), "a\nb");
    }

    #[test]
    fn test_set_text_preserves_lines() {
        let mut editor = ContentEditor::new("Content");
        editor.set_text("first\n\nthird\n");
        assert_eq!(editor.text(), "first\n\nthird\n");
    }

    #[test]
    fn test_set_empty_text() {
        let mut editor = ContentEditor::new("Content");
        editor.set_text("");
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn test_backspace_at_start_is_not_a_change() {
        let mut editor = ContentEditor::new("Content");
        assert!(!editor.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_cursor_line_splits_multibyte() {
        let palette = Palette::default();
        let line = cursor_line("héllo", 1, &palette);
        let parts: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, ["h", "é", "llo"]);
    }
}
