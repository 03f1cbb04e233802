//! Comment list widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::domain::entities::Comment;
use crate::presentation::theme::Palette;

/// Renders comments oldest first as a header line over the text, keeping
/// the newest rows visible.
pub struct CommentList<'a> {
    comments: &'a [Comment],
    palette: &'a Palette,
}

impl<'a> CommentList<'a> {
    /// Lists `comments` in `palette` colours.
    #[must_use]
    pub const fn new(comments: &'a [Comment], palette: &'a Palette) -> Self {
        Self { comments, palette }
    }

    /// Screen rows for a viewport `width` cells wide.
    fn rows(&self, width: u16) -> Vec<Line<'static>> {
        let width = usize::from(width);
        let panel = Style::default().bg(self.palette.panel);
        let header_style = panel.fg(self.palette.muted);
        let text_style = panel.fg(self.palette.foreground);
        let mut rows = Vec::new();

        for (i, comment) in self.comments.iter().enumerate() {
            if i > 0 {
                rows.push(Line::default());
            }
            let header = format!("{} - {}", comment.author(), comment.date());
            rows.extend(
                wrap(&header, width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, header_style))),
            );
            rows.extend(
                wrap(comment.text(), width)
                    .into_iter()
                    .map(|row| Line::from(Span::styled(row, text_style))),
            );
        }

        rows
    }
}

/// Breaks `text` into rows no wider than `width` display cells.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if row_width + char_width > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row.push(c);
        row_width += char_width;
    }
    rows.push(row);

    rows
}

impl Widget for CommentList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.rows(area.width);
        let overflow = rows.len().saturating_sub(usize::from(area.height));
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

        Paragraph::new(rows).scroll((scroll, 0)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    #[test]
    fn test_header_shows_author_and_date() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let comments = vec![Comment::anonymous("hello", now)];
        let palette = Palette::default();

        let rows = CommentList::new(&comments, &palette).rows(80);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].spans[0].content, "Anonymous - 2024-05-01T12:00:00.000Z");
        assert_eq!(rows[1].spans[0].content, "hello");
    }

    #[test]
    fn test_wrap_respects_display_width() {
        assert_eq!(wrap("abcdefg", 3), ["abc", "def", "g"]);
        assert_eq!(wrap("", 3), [""]);
        assert_eq!(wrap("日本語", 4), ["日本", "語"]);
    }

    #[test]
    fn test_long_comment_keeps_its_tail_in_view() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let text = format!("{}{}{}", "a".repeat(10), "b".repeat(10), "c".repeat(5));
        let comments = vec![Comment::anonymous(text, now)];
        let palette = Palette::default();
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buffer::empty(area);

        CommentList::new(&comments, &palette).render(area, &mut buf);

        assert_eq!(row_text(&buf, 0), "aaaaaaaaaa");
        assert_eq!(row_text(&buf, 1), "bbbbbbbbbb");
        assert_eq!(row_text(&buf, 2), "ccccc");
    }
}
