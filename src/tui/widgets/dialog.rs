//! Modal message dialog.
//!
//! Renders connection, query, and usage outcomes as a centered modal,
//! colored by severity. The dialog blocks all other input until
//! dismissed with Enter or Esc.

use crate::tui::app::{Dialog, DialogSeverity};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the modal dialog over the rest of the UI.
pub fn render_dialog(frame: &mut Frame, dialog: &Dialog) {
    let area = frame.area();

    let dialog_width = (area.width as f32 * 0.6).min(70.0) as u16;
    let dialog_height = dialog_height(&dialog.message, dialog_width).min(12);
    let dialog_area = center_rect(dialog_width, dialog_height, area);

    frame.render_widget(Clear, dialog_area);

    let (border_color, icon) = match dialog.severity {
        DialogSeverity::Info => (Color::Green, "✓"),
        DialogSeverity::Warning => (Color::Yellow, "⚠"),
        DialogSeverity::Critical => (Color::Red, "✗"),
    };

    let mut lines = Vec::new();
    lines.push(Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(border_color)),
        Span::raw(dialog.message.clone()),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            "[Enter/Esc]",
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Dismiss"),
    ]));

    let block = Block::default()
        .title(format!(" {} ", dialog.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(Color::Black));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(paragraph, dialog_area);
}

/// Height needed for the dialog given its wrapped message. Wrapping is
/// estimated in characters, not bytes.
fn dialog_height(message: &str, width: u16) -> u16 {
    let content_width = width.saturating_sub(4).max(1) as usize;
    let message_lines: usize = message
        .lines()
        .map(|line| line.chars().count().div_ceil(content_width).max(1))
        .sum();

    // Message + spacing (1) + prompt (1) + borders (2)
    (message_lines + 1 + 1 + 2) as u16
}

/// Centers a rectangle of the given size within the parent area.
fn center_rect(width: u16, height: u16, area: Rect) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center);
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_height_short_message() {
        let height = dialog_height("Database connection closed.", 60);
        assert_eq!(height, 5);
    }

    #[test]
    fn test_dialog_height_grows_with_message() {
        let long = "x".repeat(200);
        assert!(dialog_height(&long, 60) > dialog_height("short", 60));
    }

    #[test]
    fn test_dialog_height_counts_chars_not_bytes() {
        // 56 chars fit one wrapped line at width 60, even at 2 bytes each.
        let multibyte = "é".repeat(56);
        assert_eq!(dialog_height(&multibyte, 60), dialog_height(&"x".repeat(56), 60));
        assert_eq!(dialog_height(&multibyte, 60), 5);
    }

    #[test]
    fn test_center_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let centered = center_rect(40, 10, area);

        assert!(centered.x >= 25 && centered.x <= 35);
        assert!(centered.y >= 15 && centered.y <= 25);
        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 10);
    }
}
