//! Database abstraction layer for myq.
//!
//! Provides a trait-based interface over the MySQL driver so the query
//! executor and the TUI can be exercised against a mock in tests.

mod mock;
mod mysql;
mod types;

pub use mock::{FailingDatabaseClient, MockDatabaseClient};
pub use mysql::MySqlClient;
pub use types::{QueryResult, Row, Value};

use crate::config::ConnectionConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Trait defining the interface for database clients.
///
/// All database operations are async and return Results with MyqError.
#[async_trait]
pub trait DatabaseClient: Send + Sync {
    /// Executes a read query and returns the tabular result.
    async fn execute_query(&self, sql: &str) -> Result<QueryResult>;

    /// Executes a write statement and returns the affected-row count.
    async fn execute_update(&self, sql: &str) -> Result<u64>;

    /// Closes the database session.
    async fn close(&self) -> Result<()>;
}

/// Opens a session for the given configuration.
///
/// This is the single entry point the connection manager uses; the rest of
/// the application only sees `dyn DatabaseClient`.
pub async fn connect(config: &ConnectionConfig) -> Result<Box<dyn DatabaseClient>> {
    let client = MySqlClient::connect(config).await?;
    Ok(Box::new(client))
}
