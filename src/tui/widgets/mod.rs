//! Widgets for the myq TUI.

pub mod dialog;
pub mod form;
pub mod query_input;
pub mod table;
