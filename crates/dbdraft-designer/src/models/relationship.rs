//! Relationship model

/// Cardinality of a relationship between two tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipKind {
    /// One row of `table_a` relates to many rows of `table_b`
    OneToMany,
    /// Rows relate freely in both directions; realized via a junction table
    ManyToMany,
}

/// A relationship between two designed tables.
///
/// Endpoints are stored as table names and resolved through the owning
/// `Schema` at use time, so a relationship never outlives or dangles
/// past its tables. For `OneToMany`, `table_a` is the "one" (parent)
/// side and `table_b` the "many" (child) side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// First endpoint (parent side for one-to-many)
    pub table_a: String,
    /// Second endpoint (child side for one-to-many)
    pub table_b: String,
    /// Cardinality
    pub kind: RelationshipKind,
}

impl Relationship {
    /// Create a one-to-many relationship from parent to child
    pub fn one_to_many(parent: impl Into<String>, child: impl Into<String>) -> Self {
        Self {
            table_a: parent.into(),
            table_b: child.into(),
            kind: RelationshipKind::OneToMany,
        }
    }

    /// Create a many-to-many relationship
    pub fn many_to_many(table_a: impl Into<String>, table_b: impl Into<String>) -> Self {
        Self {
            table_a: table_a.into(),
            table_b: table_b.into(),
            kind: RelationshipKind::ManyToMany,
        }
    }

    /// Does this relationship reference the named table on either side?
    pub fn involves(&self, table_name: &str) -> bool {
        self.table_a == table_name || self.table_b == table_name
    }

    /// Does this relationship connect the same unordered pair of tables?
    pub fn links(&self, table_a: &str, table_b: &str) -> bool {
        (self.table_a == table_a && self.table_b == table_b)
            || (self.table_a == table_b && self.table_b == table_a)
    }
}
