//! Query editor widget.
//!
//! A single-line SQL input with cursor support and horizontal scrolling
//! for long queries.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Calculates the scroll offset needed to keep the cursor visible.
///
/// Both arguments and the result are character counts, not byte indices.
pub fn scroll_offset(cursor: usize, available_width: usize) -> usize {
    if cursor <= available_width {
        0
    } else {
        cursor.saturating_sub(available_width)
    }
}

/// Query input widget.
pub struct QueryInput<'a> {
    text: &'a str,
    cursor: usize,
    focused: bool,
    enabled: bool,
}

impl<'a> QueryInput<'a> {
    /// Creates a new query input widget.
    pub fn new(text: &'a str, cursor: usize, focused: bool, enabled: bool) -> Self {
        Self {
            text,
            cursor,
            focused,
            enabled,
        }
    }

    /// Height the editor needs, including its border.
    pub const HEIGHT: u16 = 3;
}

impl Widget for QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = if self.enabled {
            " Query (Enter to execute) "
        } else {
            " Query (connect first) "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);

        // Border left (1) + prompt "> " (2) + border right (1) + cursor (1)
        let available_width = area.width.saturating_sub(5) as usize;
        let cursor_chars = self.text[..self.cursor.min(self.text.len())]
            .chars()
            .count();
        let offset = scroll_offset(cursor_chars, available_width);
        let visible_text: String = self.text.chars().skip(offset).collect();

        let prompt_style = if self.enabled {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let line = Line::from(vec![
            Span::styled("> ", prompt_style),
            Span::raw(visible_text),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_within_width() {
        assert_eq!(scroll_offset(5, 20), 0);
        assert_eq!(scroll_offset(20, 20), 0);
    }

    #[test]
    fn test_scroll_offset_beyond_width() {
        assert_eq!(scroll_offset(25, 20), 5);
        assert_eq!(scroll_offset(50, 20), 30);
    }

    #[test]
    fn test_scroll_offset_zero_width() {
        assert_eq!(scroll_offset(5, 0), 5);
    }

    #[test]
    fn test_render_scrolled_multibyte_text() {
        // 40 chars but 80 bytes; cursor at the end forces scrolling.
        let text = "é".repeat(40);
        let widget = QueryInput::new(&text, text.len(), true, true);

        let area = Rect::new(0, 0, 20, QueryInput::HEIGHT);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
    }

    #[test]
    fn test_render_short_text_no_scroll() {
        let widget = QueryInput::new("SELECT 1", 8, true, true);

        let area = Rect::new(0, 0, 40, QueryInput::HEIGHT);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let row: String = (0..40).map(|x| buf.get(x, 1).symbol().to_string()).collect();
        assert!(row.contains("SELECT 1"));
    }
}
