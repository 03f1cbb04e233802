use ratatui::style::{Color, Modifier, Style};

use crate::domain::entities::ThemeMode;

/// Colours applied across every screen for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Mode the colours belong to.
    pub mode: ThemeMode,
    /// Screen fill.
    pub background: Color,
    /// Body text.
    pub foreground: Color,
    /// Focus and highlight.
    pub accent: Color,
    /// Secondary text.
    pub muted: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Errors.
    pub error: Color,
    /// Success toasts.
    pub success: Color,
    /// Raised surfaces such as comments and toasts.
    pub panel: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_mode(ThemeMode::default())
    }
}

impl Palette {
    /// Colours for `mode`.
    #[must_use]
    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                mode,
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Rgb(24, 24, 27),
                accent: Color::Rgb(37, 99, 235),
                muted: Color::Rgb(113, 113, 122),
                border: Color::Rgb(212, 212, 216),
                error: Color::Rgb(220, 38, 38),
                success: Color::Rgb(22, 163, 74),
                panel: Color::Rgb(243, 244, 246),
            },
            ThemeMode::Dark => Self {
                mode,
                background: Color::Rgb(24, 24, 27),
                foreground: Color::Rgb(228, 228, 231),
                accent: Color::Rgb(96, 165, 250),
                muted: Color::Rgb(161, 161, 170),
                border: Color::Rgb(63, 63, 70),
                error: Color::Rgb(248, 113, 113),
                success: Color::Rgb(74, 222, 128),
                panel: Color::Rgb(39, 39, 42),
            },
        }
    }

    /// Default text on the background.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    /// Border colour, accented when focused.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Inline error text.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Bold headings.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    /// Inverted cell under the cursor.
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default().bg(self.foreground).fg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_differ() {
        let light = Palette::for_mode(ThemeMode::Light);
        let dark = Palette::for_mode(ThemeMode::Dark);

        assert_ne!(light.background, dark.background);
        assert_eq!(light.mode, ThemeMode::Light);
        assert_eq!(Palette::default(), light);
    }
}
