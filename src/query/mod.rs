//! Query classification and execution.

mod classify;
mod executor;

pub use classify::{classify, QueryKind};
pub use executor::{QueryExecutor, QueryOutcome};
