//! Terminal User Interface for myq.
//!
//! Provides the main application loop using ratatui and crossterm. Every
//! user action runs to completion before the next repaint: connect and
//! execute are awaited inline, so a long-running statement blocks the
//! interface until the driver returns.

pub mod app;
mod events;
pub mod grid;
mod ui;
pub mod widgets;

pub use app::App;
pub use events::{Event, EventHandler};

use crate::config::Config;
use crate::connection::ConnectionManager;
use crate::error::{MyqError, Result};
use crate::query::{QueryExecutor, QueryOutcome};
use app::Action;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::{error, info};

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new() -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        Ok(Self {
            terminal,
            event_handler: EventHandler::new(),
        })
    }

    /// Sets up the terminal for TUI rendering.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| MyqError::internal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| MyqError::internal(format!("Failed to enter alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
            .map_err(|e| MyqError::internal(format!("Failed to create terminal: {e}")))
    }

    /// Restores the terminal to its original state.
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| MyqError::internal(format!("Failed to disable raw mode: {e}")))?;

        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .map_err(|e| MyqError::internal(format!("Failed to leave alternate screen: {e}")))?;

        self.terminal
            .show_cursor()
            .map_err(|e| MyqError::internal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    /// Runs the main event loop until the user quits.
    pub async fn run(&mut self, config: &Config) -> Result<()> {
        // Restore the terminal if the application panics mid-draw.
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let mut app = App::new(&config.connection);
        let mut manager = ConnectionManager::new();

        while app.running {
            self.terminal
                .draw(|frame| ui::render(frame, &app))
                .map_err(|e| MyqError::internal(format!("Failed to draw: {e}")))?;

            let event = self.event_handler.next()?;
            let action = app.handle_event(event);
            perform(action, &mut app, &mut manager).await;
        }

        // Release the session on shutdown.
        manager.disconnect().await;

        let _ = panic::take_hook();

        Ok(())
    }
}

/// Performs an action the app requested. Errors never propagate: every
/// outcome ends up in a dialog.
async fn perform(action: Action, app: &mut App, manager: &mut ConnectionManager) {
    match action {
        Action::None | Action::Quit => {}

        Action::Connect => match app.connect_config() {
            Ok(config) => {
                info!("Connecting to {}", config.display_string());
                match manager.connect(&config).await {
                    Ok(()) => app.apply_connect_success(config.display_string()),
                    Err(e) => {
                        error!("Connect failed: {}", e);
                        app.show_error(&e);
                    }
                }
            }
            Err(e) => app.show_error(&e),
        },

        Action::Disconnect => {
            manager.disconnect().await;
            app.apply_disconnect();
        }

        Action::Execute(text) => {
            let Some(db) = manager.db() else {
                // The app already guards this; kept as the manager-level
                // fail-fast for the not-connected condition.
                app.show_error(&MyqError::usage("Please connect to a database first."));
                return;
            };

            // Previous results are discarded at the start of every
            // execution, whatever kind of query follows.
            app.grid.clear();

            let executor = QueryExecutor::new(db);
            match executor.execute(&text).await {
                Ok(outcome) => {
                    if let QueryOutcome::Rows(result) = &outcome {
                        app.grid.project(result);
                    }
                    app.show_info("Query Success", &outcome.summary());
                }
                Err(e) => {
                    error!("Query failed: {}", e);
                    app.show_error(&e);
                }
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the TUI application.
pub async fn run(config: &Config) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.run(config).await
}
