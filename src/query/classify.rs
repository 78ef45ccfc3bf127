//! Lexical read/write classification of query text.
//!
//! A query is read-like when it starts with SELECT or SHOW; everything
//! else is treated as a write and executed for its affected-row count.
//! This is a pure prefix check with no SQL parsing: text that opens with
//! a comment or whitespace before SELECT classifies as a write. The
//! caller trims user input before classification, so in practice only
//! comments trigger the quirk.

/// How a query will be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Expected to return a tabular result (SELECT/SHOW).
    Read,
    /// Expected to return only an affected-row count.
    Write,
}

/// Classifies query text by its prefix.
pub fn classify(sql: &str) -> QueryKind {
    if has_prefix_ignore_case(sql, "select") || has_prefix_ignore_case(sql, "show") {
        QueryKind::Read
    } else {
        QueryKind::Write
    }
}

fn has_prefix_ignore_case(text: &str, prefix: &str) -> bool {
    text.len() >= prefix.len() && text[..prefix.len()].eq_ignore_ascii_case(prefix)
}
