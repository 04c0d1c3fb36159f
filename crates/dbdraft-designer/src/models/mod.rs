//! Models for schema design
//!
//! Core data structures for representing the designed schema: tables,
//! their attributes, and the relationships between tables. These are
//! pure data types plus integrity operations; anything touching a live
//! database lives in `service`.

mod attribute;
mod relationship;
mod schema;
mod table;
mod validation;

pub use attribute::Attribute;
pub use relationship::{Relationship, RelationshipKind};
pub use schema::Schema;
pub use table::Table;
pub use validation::ValidationError;
