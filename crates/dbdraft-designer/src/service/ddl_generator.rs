//! DDL generation for schema designs
//!
//! Turns a `Schema` into an ordered block of `CREATE TABLE IF NOT EXISTS`
//! statements, synthesizing the foreign-key columns implied by
//! one-to-many relationships and the junction tables implied by
//! many-to-many relationships.

use std::collections::HashMap;

use crate::models::{Attribute, RelationshipKind, Schema};

/// DDL generator for creating SQL statements from schema designs
///
/// This is a stateless utility — all methods are associated functions
/// that take the schema data as input. Generation is a pure function of
/// the schema: the same state always yields byte-identical output.
pub struct DdlGenerator;

impl DdlGenerator {
    /// Wrap an identifier in double quotes, doubling any embedded quote
    fn quote_ident(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    /// Generate one `CREATE TABLE IF NOT EXISTS` statement per table, in
    /// schema order, followed by one per synthesized junction table.
    ///
    /// Relationships the schema cannot satisfy (a one-to-many parent or
    /// a many-to-many endpoint without a primary key) are skipped rather
    /// than producing invalid SQL; `Schema::validate` reports them.
    pub fn generate_create_tables(schema: &Schema) -> String {
        let mut out = String::new();

        // Relationship pass: columns to synthesize, constraints to attach,
        // junction tables to realize later. Keyed by child table name;
        // constraint order within a table follows relationship order.
        let mut fk_columns_to_add: HashMap<String, Vec<Attribute>> = HashMap::new();
        let mut fk_constraints: HashMap<String, Vec<String>> = HashMap::new();
        let mut junction_tables: Vec<(String, String, String)> = Vec::new();

        for rel in &schema.relationships {
            match rel.kind {
                RelationshipKind::OneToMany => {
                    let (Some(parent), Some(child)) =
                        (schema.find_table(&rel.table_a), schema.find_table(&rel.table_b))
                    else {
                        continue;
                    };
                    let pk_attrs = parent.primary_keys();
                    if pk_attrs.is_empty() {
                        // Callers should have rejected this upstream; skip
                        // rather than emit an unsatisfiable constraint.
                        tracing::debug!(
                            parent = %parent.name,
                            child = %child.name,
                            "skipping one-to-many relationship: parent has no primary key"
                        );
                        continue;
                    }
                    for pk in pk_attrs {
                        if !child.has_attribute(&pk.name) {
                            fk_columns_to_add
                                .entry(child.name.clone())
                                .or_default()
                                .push(
                                    Attribute::named(&pk.name).data_type(&pk.data_type),
                                );
                        }
                        fk_constraints.entry(child.name.clone()).or_default().push(
                            format!(
                                "FOREIGN KEY ({}) REFERENCES {}({})",
                                Self::quote_ident(&pk.name),
                                Self::quote_ident(&parent.name),
                                Self::quote_ident(&pk.name)
                            ),
                        );
                    }
                }
                RelationshipKind::ManyToMany => {
                    let name = format!("{}_{}", rel.table_a, rel.table_b);
                    junction_tables.push((name, rel.table_a.clone(), rel.table_b.clone()));
                }
            }
        }

        // Per-table emission in schema order.
        for table in &schema.tables {
            let mut col_defs: Vec<String> = Vec::new();
            let mut pk_cols: Vec<String> = Vec::new();

            for attr in &table.attributes {
                let mut def = format!("{} {}", Self::quote_ident(&attr.name), attr.data_type);
                if attr.is_primary_key {
                    pk_cols.push(Self::quote_ident(&attr.name));
                }
                if !attr.is_nullable {
                    def.push_str(" NOT NULL");
                }
                // Primary-key columns are never separately marked unique;
                // the PRIMARY KEY clause already enforces it.
                if attr.is_unique && !attr.is_primary_key {
                    def.push_str(" UNIQUE");
                }
                col_defs.push(def);
            }

            if let Some(fk_attrs) = fk_columns_to_add.get(&table.name) {
                for fk_attr in fk_attrs {
                    if !table.has_attribute(&fk_attr.name) {
                        let mut def =
                            format!("{} {}", Self::quote_ident(&fk_attr.name), fk_attr.data_type);
                        if !fk_attr.is_nullable {
                            def.push_str(" NOT NULL");
                        }
                        col_defs.push(def);
                    }
                }
            }

            if !pk_cols.is_empty() {
                col_defs.push(format!("PRIMARY KEY ({})", pk_cols.join(", ")));
            }

            if let Some(constraints) = fk_constraints.get(&table.name) {
                col_defs.extend(constraints.iter().cloned());
            }

            out.push_str(&Self::format_create_table(&table.name, &col_defs));
        }

        // Junction emission for deferred many-to-many pairs.
        for (junction_name, a_name, b_name) in &junction_tables {
            let (Some(a_table), Some(b_table)) =
                (schema.find_table(a_name), schema.find_table(b_name))
            else {
                continue;
            };
            let a_pks = a_table.primary_keys();
            let b_pks = b_table.primary_keys();
            if a_pks.is_empty() || b_pks.is_empty() {
                tracing::debug!(
                    junction = %junction_name,
                    "skipping junction table: an endpoint has no primary key"
                );
                continue;
            }

            let mut col_defs: Vec<String> = Vec::new();
            let mut pk_cols: Vec<String> = Vec::new();
            let mut constraints: Vec<String> = Vec::new();

            for (source_name, pks) in [(a_name, a_pks), (b_name, b_pks)] {
                for pk in pks {
                    let col_name = format!("{}_{}", source_name.to_lowercase(), pk.name);
                    col_defs.push(format!(
                        "{} {} NOT NULL",
                        Self::quote_ident(&col_name),
                        pk.data_type
                    ));
                    pk_cols.push(Self::quote_ident(&col_name));
                    constraints.push(format!(
                        "FOREIGN KEY ({}) REFERENCES {}({})",
                        Self::quote_ident(&col_name),
                        Self::quote_ident(source_name),
                        Self::quote_ident(&pk.name)
                    ));
                }
            }

            col_defs.push(format!("PRIMARY KEY ({})", pk_cols.join(", ")));
            col_defs.extend(constraints);

            out.push_str(&Self::format_create_table(junction_name, &col_defs));
        }

        out
    }

    /// Generate a DROP TABLE statement
    pub fn generate_drop_table(table_name: &str) -> String {
        format!("DROP TABLE IF EXISTS {};", Self::quote_ident(table_name))
    }

    fn format_create_table(table_name: &str, col_defs: &[String]) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n);\n",
            Self::quote_ident(table_name),
            col_defs.join(",\n    ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Relationship, Table};
    use indoc::indoc;

    fn person_table() -> Table {
        Table::new("Person")
            .with_attribute(Attribute::named("id").integer().primary_key())
            .with_attribute(Attribute::named("name").text().not_null())
            .with_attribute(Attribute::named("email").text().unique())
    }

    #[test]
    fn test_generate_simple_table() {
        let mut schema = Schema::new();
        schema.add_table(person_table());

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert_eq!(
            ddl,
            indoc! {r#"
                CREATE TABLE IF NOT EXISTS "Person" (
                    "id" INTEGER,
                    "name" TEXT NOT NULL,
                    "email" TEXT UNIQUE,
                    PRIMARY KEY ("id")
                );
            "#}
        );
    }

    #[test]
    fn test_table_without_primary_key_has_no_pk_clause() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("Log").with_attribute(Attribute::named("message").text()));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert_eq!(
            ddl,
            indoc! {r#"
                CREATE TABLE IF NOT EXISTS "Log" (
                    "message" TEXT
                );
            "#}
        );
    }

    #[test]
    fn test_primary_key_column_is_not_marked_unique() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("T").with_attribute(Attribute::named("id").integer().primary_key().unique()),
        );

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert!(ddl.contains("\"id\" INTEGER,\n    PRIMARY KEY (\"id\")"));
        assert!(!ddl.contains("UNIQUE"));
    }

    #[test]
    fn test_composite_primary_key_in_declaration_order() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("OrderLine")
                .with_attribute(Attribute::named("order_id").integer().primary_key())
                .with_attribute(Attribute::named("qty").integer())
                .with_attribute(Attribute::named("line_no").integer().primary_key()),
        );

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert!(ddl.contains("PRIMARY KEY (\"order_id\", \"line_no\")"));
    }

    #[test]
    fn test_one_to_many_synthesizes_foreign_key_column() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("Artist")
                .with_attribute(Attribute::named("id").integer().primary_key())
                .with_attribute(Attribute::named("name").text()),
        );
        schema.add_table(
            Table::new("Album")
                .with_attribute(Attribute::named("album_id").integer().primary_key())
                .with_attribute(Attribute::named("title").text()),
        );
        schema.add_relationship(Relationship::one_to_many("Artist", "Album"));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert_eq!(
            ddl,
            indoc! {r#"
                CREATE TABLE IF NOT EXISTS "Artist" (
                    "id" INTEGER,
                    "name" TEXT,
                    PRIMARY KEY ("id")
                );
                CREATE TABLE IF NOT EXISTS "Album" (
                    "album_id" INTEGER,
                    "title" TEXT,
                    "id" INTEGER,
                    PRIMARY KEY ("album_id"),
                    FOREIGN KEY ("id") REFERENCES "Artist"("id")
                );
            "#}
        );
    }

    #[test]
    fn test_one_to_many_with_existing_column_only_adds_constraint() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("Artist").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_table(
            Table::new("Album")
                .with_attribute(Attribute::named("album_id").integer().primary_key())
                .with_attribute(Attribute::named("id").integer()),
        );
        schema.add_relationship(Relationship::one_to_many("Artist", "Album"));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        // Declared "id" column appears exactly once, constraint still attached
        assert_eq!(ddl.matches("\"id\" INTEGER").count(), 2); // once per table
        assert!(ddl.contains("FOREIGN KEY (\"id\") REFERENCES \"Artist\"(\"id\")"));
    }

    #[test]
    fn test_one_to_many_parent_without_primary_key_is_skipped() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("Parent").with_attribute(Attribute::named("name").text()));
        schema.add_table(
            Table::new("Child").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_relationship(Relationship::one_to_many("Parent", "Child"));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert!(!ddl.contains("FOREIGN KEY"));
        assert_eq!(ddl.matches("CREATE TABLE").count(), 2);
    }

    #[test]
    fn test_many_to_many_emits_junction_table() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("A").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_table(
            Table::new("B").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_relationship(Relationship::many_to_many("A", "B"));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert_eq!(
            ddl,
            indoc! {r#"
                CREATE TABLE IF NOT EXISTS "A" (
                    "id" INTEGER,
                    PRIMARY KEY ("id")
                );
                CREATE TABLE IF NOT EXISTS "B" (
                    "id" INTEGER,
                    PRIMARY KEY ("id")
                );
                CREATE TABLE IF NOT EXISTS "A_B" (
                    "a_id" INTEGER NOT NULL,
                    "b_id" INTEGER NOT NULL,
                    PRIMARY KEY ("a_id", "b_id"),
                    FOREIGN KEY ("a_id") REFERENCES "A"("id"),
                    FOREIGN KEY ("b_id") REFERENCES "B"("id")
                );
            "#}
        );
    }

    #[test]
    fn test_many_to_many_with_composite_keys() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("Flight")
                .with_attribute(Attribute::named("carrier").text().primary_key())
                .with_attribute(Attribute::named("number").integer().primary_key()),
        );
        schema.add_table(
            Table::new("Crew").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_relationship(Relationship::many_to_many("Flight", "Crew"));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert!(ddl.contains("\"flight_carrier\" TEXT NOT NULL"));
        assert!(ddl.contains("\"flight_number\" INTEGER NOT NULL"));
        assert!(ddl.contains("\"crew_id\" INTEGER NOT NULL"));
        assert!(ddl.contains("PRIMARY KEY (\"flight_carrier\", \"flight_number\", \"crew_id\")"));
        assert!(ddl.contains("FOREIGN KEY (\"flight_carrier\") REFERENCES \"Flight\"(\"carrier\")"));
    }

    #[test]
    fn test_junction_skipped_when_endpoint_lacks_primary_key() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("A").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_table(Table::new("B").with_attribute(Attribute::named("note").text()));
        schema.add_relationship(Relationship::many_to_many("A", "B"));

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert_eq!(ddl.matches("CREATE TABLE").count(), 2);
        assert!(!ddl.contains("A_B"));
    }

    #[test]
    fn test_identifier_quotes_are_escaped_by_doubling() {
        let mut schema = Schema::new();
        schema.add_table(
            Table::new("we\"ird").with_attribute(Attribute::named("col\"umn").text()),
        );

        let ddl = DdlGenerator::generate_create_tables(&schema);

        assert!(ddl.contains("CREATE TABLE IF NOT EXISTS \"we\"\"ird\""));
        assert!(ddl.contains("\"col\"\"umn\" TEXT"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut schema = Schema::new();
        schema.add_table(person_table());
        schema.add_table(
            Table::new("Group").with_attribute(Attribute::named("id").integer().primary_key()),
        );
        schema.add_relationship(Relationship::many_to_many("Person", "Group"));
        schema.add_relationship(Relationship::one_to_many("Group", "Person"));

        let first = DdlGenerator::generate_create_tables(&schema);
        let second = DdlGenerator::generate_create_tables(&schema);

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_drop_table() {
        assert_eq!(
            DdlGenerator::generate_drop_table("users"),
            "DROP TABLE IF EXISTS \"users\";"
        );
    }
}
