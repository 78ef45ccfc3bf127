//! Mock database clients for testing.
//!
//! Provides scripted in-memory implementations of `DatabaseClient` so the
//! executor and the TUI can be tested without a server. Call counters let
//! tests assert that usage errors short-circuit before any driver call.

use super::{DatabaseClient, QueryResult, Value};
use crate::error::{MyqError, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A mock database client that returns predefined results.
pub struct MockDatabaseClient {
    result: QueryResult,
    affected: u64,
    query_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl MockDatabaseClient {
    /// Creates a mock that returns a one-row, one-column result.
    pub fn new() -> Self {
        let result = QueryResult::with_data(
            vec!["result".to_string()],
            vec![vec![Value::String("ok".to_string())]],
        );
        Self::with_result(result)
    }

    /// Creates a mock that returns the given result for read queries.
    pub fn with_result(result: QueryResult) -> Self {
        Self {
            result,
            affected: 0,
            query_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    /// Creates a mock that reports the given affected-row count for
    /// write statements.
    pub fn with_affected(affected: u64) -> Self {
        Self {
            result: QueryResult::new(),
            affected,
            query_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    /// Number of `execute_query` calls made against this mock.
    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Number of `execute_update` calls made against this mock.
    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockDatabaseClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatabaseClient for MockDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        let mut result = self.result.clone();
        result.execution_time = Duration::from_millis(1);
        Ok(result)
    }

    async fn execute_update(&self, _sql: &str) -> Result<u64> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.affected)
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// A mock database client where every call fails with a server error.
pub struct FailingDatabaseClient {
    code: Option<String>,
    message: String,
}

impl FailingDatabaseClient {
    /// Creates a failing mock with the given server code and message.
    pub fn new(code: Option<&str>, message: &str) -> Self {
        Self {
            code: code.map(String::from),
            message: message.to_string(),
        }
    }

    fn error(&self) -> MyqError {
        MyqError::Query {
            code: self.code.clone(),
            message: self.message.clone(),
        }
    }
}

#[async_trait]
impl DatabaseClient for FailingDatabaseClient {
    async fn execute_query(&self, _sql: &str) -> Result<QueryResult> {
        Err(self.error())
    }

    async fn execute_update(&self, _sql: &str) -> Result<u64> {
        Err(self.error())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_users_result() -> QueryResult {
        QueryResult::with_data(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![Value::Int(1), Value::String("a".to_string())],
                vec![Value::Int(2), Value::String("b".to_string())],
            ],
        )
    }

    #[tokio::test]
    async fn test_mock_returns_scripted_result() {
        let client = MockDatabaseClient::with_result(sample_users_result());
        let result = client.execute_query("SELECT id, name FROM users").await.unwrap();

        assert_eq!(result.columns, vec!["id", "name"]);
        assert_eq!(result.row_count, 2);
        assert_eq!(client.query_calls(), 1);
        assert_eq!(client.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_mock_update_counts_calls() {
        let client = MockDatabaseClient::with_affected(3);
        let affected = client.execute_update("DELETE FROM users").await.unwrap();

        assert_eq!(affected, 3);
        assert_eq!(client.update_calls(), 1);
    }

    #[tokio::test]
    async fn test_failing_client_reports_code() {
        let client = FailingDatabaseClient::new(Some("1064"), "syntax error");
        let err = client.execute_query("SELEC 1").await.unwrap_err();

        match err {
            MyqError::Query { code, message } => {
                assert_eq!(code.as_deref(), Some("1064"));
                assert_eq!(message, "syntax error");
            }
            other => panic!("Expected query error, got {other:?}"),
        }
    }
}
