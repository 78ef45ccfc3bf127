//! Results table widget.
//!
//! Renders the grid model as a bordered table with auto-sized columns.

use crate::tui::grid::GridModel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Maximum width for any column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
const MIN_COLUMN_WIDTH: usize = 4;

/// Widget for rendering the results grid.
pub struct ResultsTable<'a> {
    grid: &'a GridModel,
}

impl<'a> ResultsTable<'a> {
    /// Creates a new results table widget.
    pub fn new(grid: &'a GridModel) -> Self {
        Self { grid }
    }

    /// Calculates the display width for each column from the header and
    /// cell contents. Widths are in characters, matching the padding the
    /// formatter applies.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .grid
            .headers
            .iter()
            .map(|name| name.chars().count().max(MIN_COLUMN_WIDTH))
            .collect();

        for row in &self.grid.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        widths.iter().map(|&w| w.min(MAX_COLUMN_WIDTH)).collect()
    }

    /// Truncates a cell to fit within the given width, counting
    /// characters so multibyte text is never split mid-char.
    fn truncate(s: &str, max_width: usize) -> String {
        if s.chars().count() <= max_width {
            s.to_string()
        } else if max_width <= 3 {
            s.chars().take(max_width).collect()
        } else {
            let mut truncated: String = s.chars().take(max_width - 3).collect();
            truncated.push_str("...");
            truncated
        }
    }

    /// Renders the table to lines.
    fn to_lines(&self) -> Vec<Line<'a>> {
        if self.grid.is_empty() {
            return vec![Line::from(Span::styled(
                "(no results)",
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.grid.rows.len() + 4);

        lines.push(self.border_line(&widths, '┌', '┬', '┐'));
        lines.push(self.header_line(&widths));
        lines.push(self.border_line(&widths, '├', '┼', '┤'));
        for row in &self.grid.rows {
            lines.push(self.data_line(row, &widths));
        }
        lines.push(self.border_line(&widths, '└', '┴', '┘'));

        lines
    }

    fn border_line(&self, widths: &[usize], left: char, mid: char, right: char) -> Line<'a> {
        let mut border = String::new();
        border.push(left);
        for (i, &width) in widths.iter().enumerate() {
            border.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                border.push(mid);
            }
        }
        border.push(right);

        Line::from(Span::styled(border, Style::default().fg(Color::DarkGray)))
    }

    fn header_line(&self, widths: &[usize]) -> Line<'a> {
        let mut spans = vec![Span::styled("│", Style::default().fg(Color::DarkGray))];

        for (i, name) in self.grid.headers.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let padded = format!(" {:width$} ", Self::truncate(name, width), width = width);
            spans.push(Span::styled(
                padded,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }

    fn data_line(&self, row: &[String], widths: &[usize]) -> Line<'a> {
        let mut spans = vec![Span::styled("│", Style::default().fg(Color::DarkGray))];

        for (i, cell) in row.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let padded = format!(" {:width$} ", Self::truncate(cell, width), width = width);
            spans.push(Span::raw(padded));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.to_lines();

        for (i, line) in lines.iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            let y = area.y + i as u16;
            buf.set_line(area.x, y, line, area.width);
        }
    }
}
