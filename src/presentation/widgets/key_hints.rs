//! Footer listing the active key bindings.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::theme::Palette;

/// One line of `key: action` pairs.
pub struct KeyHints<'a> {
    hints: &'a [(&'a str, &'a str)],
    palette: &'a Palette,
}

impl<'a> KeyHints<'a> {
    /// Hints drawn in muted colours.
    #[must_use]
    pub const fn new(hints: &'a [(&'a str, &'a str)], palette: &'a Palette) -> Self {
        Self { hints, palette }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(self.hints.len() * 3);
        for (i, (key, label)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", self.palette.muted_style()));
            }
            spans.push(Span::styled(
                *key,
                self.palette.muted_style().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(format!(": {label}"), self.palette.muted_style()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
