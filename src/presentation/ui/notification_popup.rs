use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Palette;

/// Toast drawn in the top-right corner over the active screen.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    palette: &'a Palette,
}

impl<'a> NotificationPopup<'a> {
    /// Wraps the head toast for drawing with `palette`.
    #[must_use]
    pub const fn new(notification: &'a Notification, palette: &'a Palette) -> Self {
        Self {
            notification,
            palette,
        }
    }

    fn popup_area(&self, area: Rect) -> Rect {
        let title_width = self.notification.title.width().saturating_add(2);
        let message_width = self.notification.message.width();

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message_width.max(title_width))
            .unwrap_or(u16::MAX)
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message_width).unwrap_or(u16::MAX);
        let lines = content_width.div_ceil(inner_width);
        let height = lines.saturating_add(2).clamp(3, 10);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 1;

        area.intersection(Rect::new(x, y, width, height))
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = self.popup_area(area);
        if popup_area.area() == 0 {
            return;
        }

        let color = match self.notification.level {
            NotificationLevel::Success => self.palette.success,
            NotificationLevel::Error => self.palette.error,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.notification.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.palette.panel));

        let para = Paragraph::new(self.notification.message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(self.palette.foreground));

        Clear.render(popup_area, buf);
        para.render(popup_area, buf);
    }
}
