//! Connection manager for the single database session.
//!
//! Owns the one database session the application may hold. The UI keeps
//! the connect action disabled while connected, so `connect` over a live
//! session only happens if that affordance is bypassed; it closes the old
//! session first rather than leaking it.

use crate::config::ConnectionConfig;
use crate::db::DatabaseClient;
use crate::error::Result;
use tracing::{info, warn};

/// Manages the application's single database session.
#[derive(Default)]
pub struct ConnectionManager {
    active: Option<Box<dyn DatabaseClient>>,
    info: Option<String>,
}

impl ConnectionManager {
    /// Creates a manager with no open session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with an existing client, for tests.
    pub fn with_client(db: Box<dyn DatabaseClient>, info: impl Into<String>) -> Self {
        Self {
            active: Some(db),
            info: Some(info.into()),
        }
    }

    /// Opens a session using the given configuration.
    ///
    /// On success the new handle is stored and the manager reports
    /// connected. On failure the manager stays disconnected and the error
    /// carries the server's code and message.
    pub async fn connect(&mut self, config: &ConnectionConfig) -> Result<()> {
        let db = crate::db::connect(config).await?;

        if let Some(old) = self.active.take() {
            warn!("Connect requested while already connected; closing old session");
            let _ = old.close().await;
        }

        info!("Connected to {}", config.display_string());
        self.active = Some(db);
        self.info = Some(config.display_string());

        Ok(())
    }

    /// Closes and releases the session if one exists.
    ///
    /// Idempotent: disconnecting with no open session is a no-op.
    pub async fn disconnect(&mut self) {
        if let Some(db) = self.active.take() {
            if let Err(e) = db.close().await {
                warn!("Error closing database session: {}", e);
            }
            info!("Disconnected");
        }
        self.info = None;
    }

    /// Gets the active database client.
    pub fn db(&self) -> Option<&dyn DatabaseClient> {
        self.active.as_deref()
    }

    /// Checks if there is an open session.
    pub fn is_connected(&self) -> bool {
        self.active.is_some()
    }

    /// Password-free description of the open session, for the status line.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }
}
