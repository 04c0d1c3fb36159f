//! SQLite driver for dbdraft
//!
//! Implements the `Connection` and `Transaction` traits from
//! `dbdraft-core` on top of rusqlite. The designer keeps exactly one
//! connection open at a time; all statement execution is serialized
//! through a mutex around the underlying handle.

mod connection;

pub use connection::{SqliteConnection, SqliteTransaction};
