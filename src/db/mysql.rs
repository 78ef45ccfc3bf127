//! MySQL database client implementation.
//!
//! Provides the `MySqlClient` struct that implements the `DatabaseClient`
//! trait using sqlx. The wire protocol is entirely sqlx's responsibility;
//! this module only maps configuration in and rows/errors out.

use crate::config::ConnectionConfig;
use crate::db::{DatabaseClient, QueryResult, Row, Value};
use crate::error::{MyqError, Result};
use async_trait::async_trait;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::{Column as SqlxColumn, Executor, Row as SqlxRow, TypeInfo};
use std::time::{Duration, Instant};
use tracing::debug;

/// Timeout for acquiring the initial connection.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// MySQL database client backed by a single-connection pool.
#[derive(Debug)]
pub struct MySqlClient {
    pool: MySqlPool,
}

impl MySqlClient {
    /// Opens a new session using the parameters from the connect form.
    ///
    /// The pool is capped at one connection: the application holds at most
    /// one server session at a time. Failures are reported once, with the
    /// server error code when available; there is no retry.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
        let conn_str = config.to_connection_string();
        debug!("Connecting to {}", config.display_string());

        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .connect(&conn_str)
            .await
            .map_err(|e| connection_error(e, config))?;

        debug!("Connected to {}", config.display_string());
        Ok(Self { pool })
    }

    /// Fetches column names from statement metadata, for result sets
    /// with no rows to read them from. Best effort: failures leave the
    /// header list empty rather than masking the successful query.
    async fn describe_columns(&self, sql: &str) -> Vec<String> {
        match self.pool.describe(sql).await {
            Ok(describe) => describe
                .columns()
                .iter()
                .map(|col| col.name().to_string())
                .collect(),
            Err(e) => {
                debug!("Could not describe statement: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl DatabaseClient for MySqlClient {
    async fn execute_query(&self, sql: &str) -> Result<QueryResult> {
        let start = Instant::now();

        let fetched = sqlx::query(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        let execution_time = start.elapsed();

        // Column names come from the row metadata, in result order. An
        // empty result set carries no row, so the headers are recovered
        // from the prepared statement's metadata instead.
        let columns: Vec<String> = match fetched.first() {
            Some(row) => row
                .columns()
                .iter()
                .map(|col| col.name().to_string())
                .collect(),
            None => self.describe_columns(sql).await,
        };

        let rows: Vec<Row> = fetched.iter().map(convert_row).collect();
        let row_count = rows.len();

        debug!("Query returned {} rows in {:?}", row_count, execution_time);

        Ok(QueryResult {
            columns,
            rows,
            row_count,
            execution_time,
        })
    }

    async fn execute_update(&self, sql: &str) -> Result<u64> {
        let done = sqlx::query(sql)
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        debug!("Statement affected {} rows", done.rows_affected());
        Ok(done.rows_affected())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

/// Converts a sqlx MySqlRow to our Row type.
fn convert_row(row: &MySqlRow) -> Row {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts a single column value from a MySqlRow to our Value type.
///
/// Decoding is type-name driven; anything unrecognized is coerced through
/// String, then raw bytes, falling back to NULL.
fn convert_value(row: &MySqlRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "BOOLEAN" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),

        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "YEAR" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Int)
            .unwrap_or(Value::Null),

        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => row
            .try_get::<Option<u64>, _>(index)
            .ok()
            .flatten()
            .map(Value::UInt)
            .unwrap_or(Value::Null),

        "FLOAT" => row
            .try_get::<Option<f32>, _>(index)
            .ok()
            .flatten()
            .map(|v| Value::Float(v as f64))
            .unwrap_or(Value::Null),

        "DOUBLE" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::Float)
            .unwrap_or(Value::Null),

        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => row
            .try_get::<Option<Vec<u8>>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bytes)
            .unwrap_or(Value::Null),

        // CHAR/VARCHAR/TEXT/ENUM/DECIMAL/date-time and anything else:
        // coerce to text the way the grid will display it.
        _ => {
            if let Ok(Some(s)) = row.try_get::<Option<String>, _>(index) {
                Value::String(s)
            } else if let Ok(Some(b)) = row.try_get::<Option<Vec<u8>>, _>(index) {
                Value::String(String::from_utf8_lossy(&b).into_owned())
            } else {
                Value::Null
            }
        }
    }
}

/// Maps a sqlx connect failure to a Connection error with the server code.
fn connection_error(error: sqlx::Error, config: &ConnectionConfig) -> MyqError {
    let (code, message) = split_database_error(&error);
    let message = match message {
        Some(msg) => msg,
        None => format!(
            "Cannot connect to {}:{}: {}",
            config.host, config.port, error
        ),
    };
    MyqError::Connection { code, message }
}

/// Maps a sqlx statement failure to a Query error with the server code.
fn query_error(error: sqlx::Error) -> MyqError {
    let (code, message) = split_database_error(&error);
    MyqError::Query {
        code,
        message: message.unwrap_or_else(|| error.to_string()),
    }
}

/// Extracts the native MySQL error number and message, when the failure
/// came from the server rather than the transport.
fn split_database_error(error: &sqlx::Error) -> (Option<String>, Option<String>) {
    let Some(db_error) = error.as_database_error() else {
        return (None, None);
    };

    let code = db_error
        .try_downcast_ref::<sqlx::mysql::MySqlDatabaseError>()
        .map(|e| e.number().to_string())
        .or_else(|| db_error.code().map(|c| c.into_owned()));

    (code, Some(db_error.message().to_string()))
}
