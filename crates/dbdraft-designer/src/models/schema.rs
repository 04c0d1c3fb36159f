//! Schema model

use super::{Relationship, RelationshipKind, Table, ValidationError};

/// Root schema model holding tables and relationships.
///
/// The schema is the sole owner of its tables; relationships refer to
/// tables by name. Insertion order of tables is DDL emission order.
///
/// Invalid mutations (duplicate names, missing endpoints) are absorbed
/// as silent no-ops; callers pre-validate and surface user-facing
/// errors, with `validate` as the advisory check for DDL readiness.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Tables in insertion order
    pub tables: Vec<Table>,
    /// Relationships in insertion order
    pub relationships: Vec<Relationship>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table; a duplicate name (case-sensitive) is a no-op
    pub fn add_table(&mut self, table: Table) {
        if self.find_table(&table.name).is_some() {
            return;
        }
        self.tables.push(table);
    }

    /// Remove a table by name, cascading removal of every relationship
    /// that references it on either side
    pub fn remove_table(&mut self, table_name: &str) {
        self.tables.retain(|t| t.name != table_name);
        self.relationships.retain(|r| !r.involves(table_name));
    }

    /// Find a table by exact name
    pub fn find_table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Find a table by exact name, mutably
    pub fn find_table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    /// Add a relationship.
    ///
    /// No-op when an equivalent relationship already exists (same
    /// unordered endpoint pair and same kind, regardless of endpoint
    /// order) or when either endpoint is not a member of this schema.
    pub fn add_relationship(&mut self, relationship: Relationship) {
        if self.find_table(&relationship.table_a).is_none()
            || self.find_table(&relationship.table_b).is_none()
        {
            tracing::debug!(
                table_a = %relationship.table_a,
                table_b = %relationship.table_b,
                "ignoring relationship with unknown endpoint"
            );
            return;
        }
        let duplicate = self.relationships.iter().any(|r| {
            r.kind == relationship.kind && r.links(&relationship.table_a, &relationship.table_b)
        });
        if duplicate {
            return;
        }
        self.relationships.push(relationship);
    }

    /// Check the schema for conditions that would make DDL generation
    /// skip or mangle parts of it. Advisory: generation itself never
    /// fails, it just leaves out what it cannot satisfy.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for table in &self.tables {
            if table.attributes.is_empty() {
                errors.push(ValidationError::new(
                    table.name.clone(),
                    "Table has no attributes",
                ));
            }
        }

        for rel in &self.relationships {
            match rel.kind {
                RelationshipKind::OneToMany => {
                    if let Some(parent) = self.find_table(&rel.table_a) {
                        if parent.primary_keys().is_empty() {
                            errors.push(ValidationError::new(
                                parent.name.clone(),
                                format!(
                                    "Parent of one-to-many relationship to '{}' has no primary key",
                                    rel.table_b
                                ),
                            ));
                        }
                    }
                }
                RelationshipKind::ManyToMany => {
                    for endpoint in [&rel.table_a, &rel.table_b] {
                        if let Some(table) = self.find_table(endpoint) {
                            if table.primary_keys().is_empty() {
                                errors.push(ValidationError::new(
                                    table.name.clone(),
                                    "Endpoint of many-to-many relationship has no primary key",
                                ));
                            }
                        }
                    }
                    // Junction name collisions are not rejected by generation,
                    // but the resulting CREATE TABLE would silently no-op
                    // against the existing table.
                    let junction = format!("{}_{}", rel.table_a, rel.table_b);
                    if self.find_table(&junction).is_some() {
                        errors.push(ValidationError::new(
                            junction.clone(),
                            format!(
                                "Junction table name '{}' collides with an existing table",
                                junction
                            ),
                        ));
                    }
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Attribute;

    fn keyed_table(name: &str) -> Table {
        Table::new(name).with_attribute(Attribute::named("id").integer().primary_key())
    }

    #[test]
    fn test_add_table_duplicate_name_is_noop() {
        let mut schema = Schema::new();
        schema.add_table(keyed_table("users"));
        schema.add_table(Table::new("users"));

        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].attributes.len(), 1);
    }

    #[test]
    fn test_remove_table_cascades_relationships() {
        let mut schema = Schema::new();
        schema.add_table(keyed_table("users"));
        schema.add_table(keyed_table("posts"));
        schema.add_table(keyed_table("tags"));
        schema.add_relationship(Relationship::one_to_many("users", "posts"));
        schema.add_relationship(Relationship::many_to_many("posts", "tags"));

        schema.remove_table("posts");

        assert_eq!(schema.tables.len(), 2);
        assert!(schema.relationships.is_empty());
    }

    #[test]
    fn test_add_relationship_duplicate_either_order_is_noop() {
        let mut schema = Schema::new();
        schema.add_table(keyed_table("a"));
        schema.add_table(keyed_table("b"));

        schema.add_relationship(Relationship::many_to_many("a", "b"));
        schema.add_relationship(Relationship::many_to_many("a", "b"));
        schema.add_relationship(Relationship::many_to_many("b", "a"));

        assert_eq!(schema.relationships.len(), 1);
    }

    #[test]
    fn test_add_relationship_unknown_endpoint_is_noop() {
        let mut schema = Schema::new();
        schema.add_table(keyed_table("a"));

        schema.add_relationship(Relationship::one_to_many("a", "ghost"));

        assert!(schema.relationships.is_empty());
    }

    #[test]
    fn test_validate_flags_parent_without_primary_key() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("parent").with_attribute(Attribute::named("name").text()));
        schema.add_table(keyed_table("child"));
        schema.add_relationship(Relationship::one_to_many("parent", "child"));

        let errors = schema.validate();
        assert!(errors.iter().any(|e| e.field == "parent"));
    }

    #[test]
    fn test_validate_flags_junction_name_collision() {
        let mut schema = Schema::new();
        schema.add_table(keyed_table("a"));
        schema.add_table(keyed_table("b"));
        schema.add_table(keyed_table("a_b"));
        schema.add_relationship(Relationship::many_to_many("a", "b"));

        let errors = schema.validate();
        assert!(errors.iter().any(|e| e.field == "a_b"));
    }

    #[test]
    fn test_validate_clean_schema_has_no_errors() {
        let mut schema = Schema::new();
        schema.add_table(keyed_table("users"));
        schema.add_table(keyed_table("posts"));
        schema.add_relationship(Relationship::one_to_many("users", "posts"));

        assert!(schema.validate().is_empty());
    }
}
