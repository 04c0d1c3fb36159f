//! dbdraft core - shared abstractions for the schema designer
//!
//! This crate provides the types that the other dbdraft crates depend on:
//!
//! - `Connection` / `Transaction` - traits a database driver implements
//! - `Value`, `Row`, `QueryResult`, `StatementResult` - result plumbing
//! - `DbDraftError` / `Result` - the common error type

mod connection;
mod error;
mod types;

pub use connection::*;
pub use error::*;
pub use types::*;
