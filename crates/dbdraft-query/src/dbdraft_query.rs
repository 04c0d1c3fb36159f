//! dbdraft query - statement splitting and script execution
//!
//! `split_statements` partitions a raw SQL blob into individual
//! statements while respecting string literals and comments;
//! `execute_script` runs such a blob against a connection inside a
//! single transaction and reduces the outcome to displayable data.

mod batch;
mod splitter;

pub use batch::{ScriptOutcome, execute_script};
pub use splitter::split_statements;
