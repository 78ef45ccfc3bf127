//! Application state for the TUI.
//!
//! Holds the connect form, the query editor, the results grid, and the
//! modal dialog. Key handling is synchronous and returns an `Action` for
//! the runner to perform; the app itself never touches the database.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::events::Event;
use super::grid::GridModel;
use crate::config::ConnectionConfig;
use crate::error::{MyqError, Result};

/// Which control currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Host,
    Port,
    User,
    Password,
    Database,
    Query,
}

impl Focus {
    /// Cycles to the next control.
    pub fn next(self) -> Self {
        match self {
            Self::Host => Self::Port,
            Self::Port => Self::User,
            Self::User => Self::Password,
            Self::Password => Self::Database,
            Self::Database => Self::Query,
            Self::Query => Self::Host,
        }
    }

    /// Cycles to the previous control.
    pub fn prev(self) -> Self {
        match self {
            Self::Host => Self::Query,
            Self::Port => Self::Host,
            Self::User => Self::Port,
            Self::Password => Self::User,
            Self::Database => Self::Password,
            Self::Query => Self::Database,
        }
    }
}

/// Severity of a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSeverity {
    Info,
    Warning,
    Critical,
}

/// A modal message dialog. Blocks all other input until dismissed.
#[derive(Debug, Clone)]
pub struct Dialog {
    pub severity: DialogSeverity,
    pub title: String,
    pub message: String,
}

/// An action for the runner to perform after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// Open a session with the current form values.
    Connect,
    /// Close the open session.
    Disconnect,
    /// Execute the given query text.
    Execute(String),
    /// Exit the application.
    Quit,
}

/// Input state for a single-line text field.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    /// Current input text.
    pub text: String,
    /// Cursor position as a byte index, always on a char boundary.
    pub cursor: usize,
}

impl InputState {
    /// Creates an input prefilled with the given text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = floor_char_boundary(&self.text, self.cursor - 1);
            self.text.remove(prev);
            self.cursor = prev;
        }
    }

    /// Deletes the character at the cursor (delete key).
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Moves the cursor left one character.
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = floor_char_boundary(&self.text, self.cursor - 1);
        }
    }

    /// Moves the cursor right one character.
    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            let mut next = self.cursor + 1;
            while next < self.text.len() && !self.text.is_char_boundary(next) {
                next += 1;
            }
            self.cursor = next;
        }
    }

    /// Moves the cursor to the start of the input.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the input.
    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    /// Current focus control.
    pub focus: Focus,
    /// Connect form fields.
    pub host: InputState,
    pub port: InputState,
    pub user: InputState,
    pub password: InputState,
    pub database: InputState,
    /// Query editor state.
    pub query: InputState,
    /// Results grid model.
    pub grid: GridModel,
    /// Modal dialog, if one is showing.
    pub dialog: Option<Dialog>,
    /// Whether a session is open.
    pub connected: bool,
    /// Password-free description of the open session.
    pub connection_info: Option<String>,
}

impl App {
    /// Creates the app with form fields prefilled from configuration.
    pub fn new(prefill: &ConnectionConfig) -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            host: InputState::with_text(&prefill.host),
            port: InputState::with_text(prefill.port.to_string()),
            user: InputState::with_text(&prefill.user),
            password: InputState::with_text(&prefill.password),
            database: InputState::with_text(prefill.database.as_deref().unwrap_or_default()),
            query: InputState::default(),
            grid: GridModel::new(),
            dialog: None,
            connected: false,
            connection_info: None,
        }
    }

    /// True while disconnected: the connect control is available.
    pub fn can_connect(&self) -> bool {
        !self.connected
    }

    /// True while connected: the disconnect control is available.
    pub fn can_disconnect(&self) -> bool {
        self.connected
    }

    /// True while connected: the execute control is available.
    pub fn can_execute(&self) -> bool {
        self.connected
    }

    /// Builds a connection config from the current form values.
    pub fn connect_config(&self) -> Result<ConnectionConfig> {
        let port = self
            .port
            .text
            .trim()
            .parse::<u16>()
            .map_err(|_| MyqError::usage(format!("Invalid port: '{}'", self.port.text)))?;

        let database = {
            let db = self.database.text.trim();
            if db.is_empty() {
                None
            } else {
                Some(db.to_string())
            }
        };

        Ok(ConnectionConfig {
            host: self.host.text.trim().to_string(),
            port,
            user: self.user.text.trim().to_string(),
            password: self.password.text.clone(),
            database,
        })
    }

    /// Transitions to connected after a successful connect.
    pub fn apply_connect_success(&mut self, info: String) {
        self.connected = true;
        self.connection_info = Some(info);
        self.show_info(
            "Connection Success",
            "Successfully connected to the database.",
        );
    }

    /// Transitions to disconnected.
    pub fn apply_disconnect(&mut self) {
        self.connected = false;
        self.connection_info = None;
        self.show_info("Disconnected", "Database connection closed.");
    }

    /// Shows an info dialog.
    pub fn show_info(&mut self, title: &str, message: &str) {
        self.dialog = Some(Dialog {
            severity: DialogSeverity::Info,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// Shows a warning dialog.
    pub fn show_warning(&mut self, title: &str, message: &str) {
        self.dialog = Some(Dialog {
            severity: DialogSeverity::Warning,
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// Shows a dialog for an error: warning for usage errors, critical
    /// for everything the server reported.
    pub fn show_error(&mut self, error: &MyqError) {
        let severity = if error.is_usage() {
            DialogSeverity::Warning
        } else {
            DialogSeverity::Critical
        };
        self.dialog = Some(Dialog {
            severity,
            title: error.category().to_string(),
            message: error.to_string(),
        });
    }

    /// Dismisses the modal dialog.
    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Handles a terminal event, returning the action to perform.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) | Event::Tick => Action::None,
        }
    }

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // A modal dialog swallows all input until dismissed.
        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dismiss_dialog();
            }
            return Action::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.handle_control_key(key.code);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Enter => {
                if self.focus == Focus::Query {
                    self.request_execute()
                } else {
                    self.focus = self.focus.next();
                    Action::None
                }
            }
            KeyCode::Char(c) => {
                self.focused_input().insert(c);
                Action::None
            }
            KeyCode::Backspace => {
                self.focused_input().backspace();
                Action::None
            }
            KeyCode::Delete => {
                self.focused_input().delete();
                Action::None
            }
            KeyCode::Left => {
                self.focused_input().move_left();
                Action::None
            }
            KeyCode::Right => {
                self.focused_input().move_right();
                Action::None
            }
            KeyCode::Home => {
                self.focused_input().move_home();
                Action::None
            }
            KeyCode::End => {
                self.focused_input().move_end();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Handles Ctrl-modified shortcuts.
    fn handle_control_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('c') | KeyCode::Char('q') => {
                self.running = false;
                Action::Quit
            }
            KeyCode::Char('o') => {
                if self.can_connect() {
                    Action::Connect
                } else {
                    self.show_warning("Already Connected", "Disconnect before connecting again.");
                    Action::None
                }
            }
            KeyCode::Char('d') => {
                if self.can_disconnect() {
                    Action::Disconnect
                } else {
                    self.show_warning("Not Connected", "No database connection is open.");
                    Action::None
                }
            }
            KeyCode::Char('e') => self.request_execute(),
            _ => Action::None,
        }
    }

    /// Requests query execution, enforcing the connected precondition.
    fn request_execute(&mut self) -> Action {
        if !self.can_execute() {
            self.show_warning("Not Connected", "Please connect to a database first.");
            return Action::None;
        }
        Action::Execute(self.query.text.clone())
    }

    /// The input state for the focused control.
    fn focused_input(&mut self) -> &mut InputState {
        match self.focus {
            Focus::Host => &mut self.host,
            Focus::Port => &mut self.port,
            Focus::User => &mut self.user,
            Focus::Password => &mut self.password,
            Focus::Database => &mut self.database,
            Focus::Query => &mut self.query,
        }
    }
}
