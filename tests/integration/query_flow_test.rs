//! End-to-end query flow: executor plus grid projection.
//!
//! Covers the worked examples from the design: a SELECT with two rows
//! projects into a two-row grid, an UPDATE reports its affected count
//! and leaves the grid empty, and usage errors never reach the driver.

use myq::db::{MockDatabaseClient, QueryResult, Value};
use myq::error::MyqError;
use myq::query::{QueryExecutor, QueryOutcome};
use myq::tui::grid::GridModel;
use pretty_assertions::assert_eq;

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
async fn select_projects_rows_into_grid() {
    let db = MockDatabaseClient::with_result(users_result());
    let executor = QueryExecutor::new(&db);
    let mut grid = GridModel::new();

    grid.clear();
    let outcome = executor
        .execute("SELECT id, name FROM users")
        .await
        .unwrap();

    let QueryOutcome::Rows(result) = &outcome else {
        panic!("Expected a tabular result");
    };
    grid.project(result);

    assert_eq!(grid.headers, vec!["id".to_string(), "name".to_string()]);
    assert_eq!(
        grid.rows,
        vec![
            vec!["1".to_string(), "a".to_string()],
            vec!["2".to_string(), "b".to_string()],
        ]
    );
    assert_eq!(result.row_count, 2);
    assert_eq!(
        outcome.summary(),
        "Query executed successfully. 2 rows returned."
    );
}

#[tokio::test]
async fn update_reports_affected_count_and_leaves_grid_empty() {
    let db = MockDatabaseClient::with_affected(1);
    let executor = QueryExecutor::new(&db);
    let mut grid = GridModel::new();

    grid.clear();
    let outcome = executor
        .execute("UPDATE users SET name='x' WHERE id=1")
        .await
        .unwrap();

    match outcome {
        QueryOutcome::Affected(count) => assert_eq!(count, 1),
        other => panic!("Expected an affected count, got {other:?}"),
    }
    assert!(grid.is_empty());
    assert_eq!(db.query_calls(), 0);
    assert_eq!(db.update_calls(), 1);
}

#[tokio::test]
async fn projection_preserves_row_and_column_order() {
    let result = QueryResult::with_data(
        vec!["c".to_string(), "a".to_string(), "b".to_string()],
        vec![
            vec![Value::Int(3), Value::Int(1), Value::Int(2)],
            vec![Value::Null, Value::Bool(true), Value::Float(1.5)],
        ],
    );
    let db = MockDatabaseClient::with_result(result);
    let executor = QueryExecutor::new(&db);
    let mut grid = GridModel::new();

    let outcome = executor.execute("SELECT c, a, b FROM t").await.unwrap();
    if let QueryOutcome::Rows(result) = &outcome {
        grid.project(result);
    }

    assert_eq!(
        grid.headers,
        vec!["c".to_string(), "a".to_string(), "b".to_string()]
    );
    assert_eq!(
        grid.rows,
        vec![
            vec!["3".to_string(), "1".to_string(), "2".to_string()],
            vec!["NULL".to_string(), "true".to_string(), "1.5".to_string()],
        ]
    );
}

#[tokio::test]
async fn empty_read_result_still_projects_headers() {
    let result = QueryResult::with_data(vec!["id".to_string(), "name".to_string()], vec![]);
    let db = MockDatabaseClient::with_result(result);
    let executor = QueryExecutor::new(&db);
    let mut grid = GridModel::new();

    let outcome = executor
        .execute("SELECT id, name FROM users WHERE 1=0")
        .await
        .unwrap();
    if let QueryOutcome::Rows(result) = &outcome {
        grid.project(result);
    }

    assert_eq!(grid.headers, vec!["id".to_string(), "name".to_string()]);
    assert!(grid.rows.is_empty());
    assert_eq!(
        outcome.summary(),
        "Query executed successfully. 0 rows returned."
    );
}

#[tokio::test]
async fn empty_query_never_reaches_the_driver() {
    let db = MockDatabaseClient::new();
    let executor = QueryExecutor::new(&db);

    for text in ["", "   ", "\n\t "] {
        let err = executor.execute(text).await.unwrap_err();
        assert!(matches!(err, MyqError::Usage(_)), "{text:?}");
    }

    assert_eq!(db.query_calls(), 0);
    assert_eq!(db.update_calls(), 0);
}
