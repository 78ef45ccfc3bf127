//! Query execution.
//!
//! Validates the query text, classifies it, and dispatches to the read or
//! write path of the database client. Kept independent of the TUI so it
//! can be tested against the mock clients.

use crate::db::{DatabaseClient, QueryResult};
use crate::error::{MyqError, Result};
use crate::query::{classify, QueryKind};
use tracing::debug;

/// Result of executing a single query.
#[derive(Debug, Clone)]
pub enum QueryOutcome {
    /// A read query returned a tabular result.
    Rows(QueryResult),
    /// A write statement affected this many rows.
    Affected(u64),
}

impl QueryOutcome {
    /// The "N rows returned" / "N rows affected" summary for the
    /// success dialog.
    pub fn summary(&self) -> String {
        match self {
            Self::Rows(result) => format!(
                "Query executed successfully. {} row{} returned.",
                result.row_count,
                if result.row_count == 1 { "" } else { "s" }
            ),
            Self::Affected(count) => format!(
                "Query executed successfully. {} row{} affected.",
                count,
                if *count == 1 { "" } else { "s" }
            ),
        }
    }
}

/// Executes ad-hoc query text against an open session.
pub struct QueryExecutor<'a> {
    db: &'a dyn DatabaseClient,
}

impl<'a> QueryExecutor<'a> {
    /// Creates an executor for the given client.
    pub fn new(db: &'a dyn DatabaseClient) -> Self {
        Self { db }
    }

    /// Validates, classifies, and executes the query text.
    ///
    /// Empty or whitespace-only text is a usage error and never reaches
    /// the driver. Driver failures pass through as query errors carrying
    /// the server's code and message.
    pub async fn execute(&self, text: &str) -> Result<QueryOutcome> {
        let sql = text.trim();
        if sql.is_empty() {
            return Err(MyqError::usage("Please enter a SQL query."));
        }

        match classify(sql) {
            QueryKind::Read => {
                debug!("Executing read query");
                let result = self.db.execute_query(sql).await?;
                Ok(QueryOutcome::Rows(result))
            }
            QueryKind::Write => {
                debug!("Executing write statement");
                let affected = self.db.execute_update(sql).await?;
                Ok(QueryOutcome::Affected(affected))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{FailingDatabaseClient, MockDatabaseClient, Value};

    fn users_result() -> QueryResult {
        QueryResult::with_data(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![Value::Int(1), Value::String("a".to_string())],
                vec![Value::Int(2), Value::String("b".to_string())],
            ],
        )
    }

    #[tokio::test]
    async fn test_select_goes_to_query_path() {
        let db = MockDatabaseClient::with_result(users_result());
        let executor = QueryExecutor::new(&db);

        let outcome = executor.execute("SELECT id, name FROM users").await.unwrap();

        match outcome {
            QueryOutcome::Rows(result) => {
                assert_eq!(result.columns, vec!["id", "name"]);
                assert_eq!(result.row_count, 2);
            }
            other => panic!("Expected rows, got {other:?}"),
        }
        assert_eq!(db.query_calls(), 1);
        assert_eq!(db.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_show_goes_to_query_path() {
        let db = MockDatabaseClient::new();
        let executor = QueryExecutor::new(&db);

        executor.execute("SHOW TABLES").await.unwrap();

        assert_eq!(db.query_calls(), 1);
        assert_eq!(db.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_update_goes_to_update_path() {
        let db = MockDatabaseClient::with_affected(1);
        let executor = QueryExecutor::new(&db);

        let outcome = executor
            .execute("UPDATE users SET name='x' WHERE id=1")
            .await
            .unwrap();

        match outcome {
            QueryOutcome::Affected(count) => assert_eq!(count, 1),
            other => panic!("Expected affected count, got {other:?}"),
        }
        assert_eq!(db.query_calls(), 0);
        assert_eq!(db.update_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_text_is_usage_error() {
        let db = MockDatabaseClient::new();
        let executor = QueryExecutor::new(&db);

        let err = executor.execute("").await.unwrap_err();
        assert!(err.is_usage());
        assert_eq!(db.query_calls(), 0);
        assert_eq!(db.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_text_is_usage_error() {
        let db = MockDatabaseClient::new();
        let executor = QueryExecutor::new(&db);

        let err = executor.execute("   \n\t  ").await.unwrap_err();
        assert!(err.is_usage());
        assert_eq!(db.query_calls(), 0);
        assert_eq!(db.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_classification() {
        let db = MockDatabaseClient::with_result(users_result());
        let executor = QueryExecutor::new(&db);

        executor.execute("  SELECT * FROM users  ").await.unwrap();

        assert_eq!(db.query_calls(), 1);
        assert_eq!(db.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_driver_error_passes_through() {
        let db = FailingDatabaseClient::new(Some("1064"), "You have an error in your SQL syntax");
        let executor = QueryExecutor::new(&db);

        let err = executor.execute("SELECT bogus").await.unwrap_err();
        match err {
            MyqError::Query { code, .. } => assert_eq!(code.as_deref(), Some("1064")),
            other => panic!("Expected query error, got {other:?}"),
        }
    }

    #[test]
    fn test_summary_pluralization() {
        assert_eq!(
            QueryOutcome::Affected(1).summary(),
            "Query executed successfully. 1 row affected."
        );
        assert_eq!(
            QueryOutcome::Affected(0).summary(),
            "Query executed successfully. 0 rows affected."
        );

        let outcome = QueryOutcome::Rows(users_result());
        assert_eq!(
            outcome.summary(),
            "Query executed successfully. 2 rows returned."
        );
    }
}
