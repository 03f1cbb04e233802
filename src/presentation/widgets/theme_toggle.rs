//! Theme indicator widget.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::domain::entities::ThemeMode;
use crate::presentation::theme::Palette;

/// Sun or moon glyph reflecting the active theme.
pub struct ThemeToggle<'a> {
    palette: &'a Palette,
}

impl<'a> ThemeToggle<'a> {
    /// Indicator for `palette.mode`.
    #[must_use]
    pub const fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Glyph shown for `mode`.
    #[must_use]
    pub const fn glyph(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "☀",
            ThemeMode::Dark => "☾",
        }
    }
}

impl Widget for ThemeToggle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", Self::glyph(self.palette.mode)),
                Style::default()
                    .bg(self.palette.panel)
                    .fg(self.palette.accent),
            ),
            Span::styled(format!(" {} ", self.palette.mode), self.palette.muted_style()),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
