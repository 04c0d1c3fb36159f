//! dbdraft designer - schema model and DDL services
//!
//! The `models` module holds the in-memory schema graph (tables, typed
//! attributes, relationships) that the presentation layer edits. The
//! `service` module turns a schema into `CREATE TABLE` DDL and keeps a
//! live database in sync with it.

pub mod models;
pub mod service;

pub use models::{Attribute, Relationship, RelationshipKind, Schema, Table, ValidationError};
pub use service::{DdlGenerator, apply_schema, recreate};
