//! UI rendering for the TUI.
//!
//! Defines the layout and renders all components: connection form,
//! query editor, results table, status line, and the modal dialog.

use super::app::{App, Focus};
use super::widgets::{dialog, form::ConnectionForm, query_input::QueryInput, table::ResultsTable};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ConnectionForm::HEIGHT),
            Constraint::Length(QueryInput::HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(ConnectionForm::new(app), layout[0]);
    render_query(frame, layout[1], app);
    render_results(frame, layout[2], app);
    render_status(frame, layout[3], app);

    if let Some(d) = &app.dialog {
        dialog::render_dialog(frame, d);
    }
}

/// Renders the query editor, positioning the terminal cursor when focused.
fn render_query(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Query;
    let widget = QueryInput::new(&app.query.text, app.query.cursor, focused, app.can_execute());
    frame.render_widget(widget, area);

    if focused && app.dialog.is_none() {
        // Account for border (1), prompt "> " (2), and scrolling. The
        // stored cursor is a byte index; the screen column is a char count.
        let available_width = area.width.saturating_sub(5) as usize;
        let cursor_chars = app.query.text[..app.query.cursor.min(app.query.text.len())]
            .chars()
            .count();
        let offset = super::widgets::query_input::scroll_offset(cursor_chars, available_width);
        let cursor_x = area.x + 1 + 2 + (cursor_chars - offset) as u16;
        let cursor_y = area.y + 1;
        if cursor_x < area.x + area.width {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

/// Renders the results table inside its group border.
fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Results ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(ResultsTable::new(&app.grid), inner);
}

/// Renders the status line: connection info plus key hints, with
/// unavailable actions dimmed.
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match app.connection_info.as_deref() {
        Some(info) => {
            spans.push(Span::styled("● ", Style::default().fg(Color::Green)));
            spans.push(Span::raw(info.to_string()));
        }
        None => {
            spans.push(Span::styled("○ ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                "disconnected",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    spans.push(Span::raw("  "));
    spans.push(hint("^O", "Connect", app.can_connect()));
    spans.push(Span::raw(" "));
    spans.push(hint("^D", "Disconnect", app.can_disconnect()));
    spans.push(Span::raw(" "));
    spans.push(hint("Enter", "Execute", app.can_execute()));
    spans.push(Span::raw(" "));
    spans.push(hint("^Q", "Quit", true));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hint(key: &str, label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(format!("{key} {label}"), style)
}
