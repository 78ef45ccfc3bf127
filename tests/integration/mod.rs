//! Integration test modules.

mod classification_test;
mod query_flow_test;
mod session_test;
