//! Script execution module
//!
//! Runs a user-submitted SQL blob statement by statement inside a
//! single transaction and reduces the batch to one displayable outcome.

mod executor;

pub use executor::{ScriptOutcome, execute_script};
