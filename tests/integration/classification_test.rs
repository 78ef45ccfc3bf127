//! Read/write classification properties.
//!
//! Every case-insensitive SELECT/SHOW prefix classifies as a read; all
//! other non-empty text classifies as a write.

use myq::query::{classify, QueryKind};

#[test]
fn select_prefixes_are_reads() {
    for sql in [
        "SELECT id, name FROM users",
        "select 1",
        "Select * from t",
        "sELECT now()",
    ] {
        assert_eq!(classify(sql), QueryKind::Read, "{sql}");
    }
}

#[test]
fn show_prefixes_are_reads() {
    for sql in ["SHOW TABLES", "show databases", "Show columns from t"] {
        assert_eq!(classify(sql), QueryKind::Read, "{sql}");
    }
}

#[test]
fn other_statements_are_writes() {
    for sql in [
        "UPDATE users SET name='x' WHERE id=1",
        "INSERT INTO t VALUES (1)",
        "DELETE FROM t",
        "CREATE TABLE t (id INT)",
        "DROP TABLE t",
        "TRUNCATE t",
        "GRANT ALL ON *.* TO 'u'",
        "WITH cte AS (SELECT 1) SELECT * FROM cte",
        "EXPLAIN SELECT 1",
    ] {
        assert_eq!(classify(sql), QueryKind::Write, "{sql}");
    }
}

#[test]
fn classification_is_purely_lexical() {
    // No whitespace or comment handling: these classify as writes even
    // though the statement inside is a SELECT.
    assert_eq!(classify(" SELECT 1"), QueryKind::Write);
    assert_eq!(classify("/* hint */ SELECT 1"), QueryKind::Write);
    assert_eq!(classify("-- note\nSELECT 1"), QueryKind::Write);

    // And no word-boundary handling either.
    assert_eq!(classify("selections"), QueryKind::Read);
    assert_eq!(classify("showdown"), QueryKind::Read);
}
