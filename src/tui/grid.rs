//! Grid model backing the results table.
//!
//! An ordered header row plus ordered data rows of text cells. The
//! projection from a query result happens here so it can be tested
//! without a terminal.

use crate::db::QueryResult;

/// In-memory model for the results grid.
#[derive(Debug, Default, Clone)]
pub struct GridModel {
    /// Column headers, in result order.
    pub headers: Vec<String>,
    /// Data rows of text cells, in result order.
    pub rows: Vec<Vec<String>>,
}

impl GridModel {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears headers and rows.
    pub fn clear(&mut self) {
        self.headers.clear();
        self.rows.clear();
    }

    /// Replaces the grid contents with the projection of a query result.
    ///
    /// Headers are taken from the result metadata and every cell is
    /// coerced to its display text, preserving column and row order.
    pub fn project(&mut self, result: &QueryResult) {
        self.headers = result.columns.clone();
        self.rows = result
            .rows
            .iter()
            .map(|row| row.iter().map(|value| value.to_display_string()).collect())
            .collect();
    }

    /// Returns true when the grid has no headers and no rows.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}
