//! Connection form widget.
//!
//! Renders the host/port/user/password/database fields as labeled
//! single-line inputs inside a "Database Connection" group. The password
//! field is echoed masked.

use crate::tui::app::{App, Focus};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// One labeled field of the connect form.
struct Field<'a> {
    label: &'a str,
    value: String,
    focused: bool,
}

/// Connection form widget.
pub struct ConnectionForm<'a> {
    app: &'a App,
}

impl<'a> ConnectionForm<'a> {
    /// Creates the form widget from the app state.
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    /// Height the form needs, including the group border.
    pub const HEIGHT: u16 = 5;

    fn fields(&self) -> Vec<Field<'a>> {
        let app = self.app;
        vec![
            Field {
                label: "Host",
                value: app.host.text.clone(),
                focused: app.focus == Focus::Host,
            },
            Field {
                label: "Port",
                value: app.port.text.clone(),
                focused: app.focus == Focus::Port,
            },
            Field {
                label: "Username",
                value: app.user.text.clone(),
                focused: app.focus == Focus::User,
            },
            Field {
                label: "Password",
                value: "*".repeat(app.password.text.chars().count()),
                focused: app.focus == Focus::Password,
            },
            Field {
                label: "Database",
                value: app.database.text.clone(),
                focused: app.focus == Focus::Database,
            },
        ]
    }
}

impl Widget for ConnectionForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.app.connected {
            " Database Connection (connected) "
        } else {
            " Database Connection "
        };

        let border_color = if self.app.connected {
            Color::Green
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        // Three fields on the first row, two on the second.
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let fields = self.fields();
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(25),
                Constraint::Percentage(35),
            ])
            .split(rows[0]);
        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let areas = [top[0], top[1], top[2], bottom[0], bottom[1]];
        for (field, field_area) in fields.into_iter().zip(areas) {
            render_field(field, field_area, buf);
        }
    }
}

fn render_field(field: Field<'_>, area: Rect, buf: &mut Buffer) {
    let label_style = Style::default().fg(Color::DarkGray);
    let value_style = if field.focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(format!("{}: ", field.label), label_style),
        Span::styled(field.value, value_style),
        if field.focused {
            Span::styled("▏", Style::default().fg(Color::Cyan))
        } else {
            Span::raw("")
        },
    ]);

    Paragraph::new(line).render(area, buf);
}
