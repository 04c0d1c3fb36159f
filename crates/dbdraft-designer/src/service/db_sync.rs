//! Keeping a live database in step with the designed schema
//!
//! The designer never migrates incrementally: the database structure is
//! fully derivable from the schema model, so synchronization is "drop
//! everything, create everything". Calling `recreate` repeatedly with
//! the same schema state yields the same structure.

use std::sync::Arc;

use dbdraft_core::{Connection, Result};
use dbdraft_query::split_statements;

use crate::models::Schema;
use crate::service::DdlGenerator;

/// Create every table of the schema in the database.
///
/// Generates the full DDL block, splits it, and executes each statement.
/// An empty schema (blank DDL) is a no-op.
pub async fn apply_schema(conn: &Arc<dyn Connection>, schema: &Schema) -> Result<()> {
    let ddl = DdlGenerator::generate_create_tables(schema);
    if ddl.trim().is_empty() {
        return Ok(());
    }

    let statements = split_statements(&ddl);
    tracing::debug!(statement_count = statements.len(), "applying schema DDL");
    for statement in &statements {
        conn.execute(statement, &[]).await?;
    }
    Ok(())
}

/// Recreate the database from the current schema state.
///
/// Drops every user table (system tables are left alone), then reissues
/// the full CREATE TABLE block. This is the sole mechanism for keeping
/// persisted structure consistent with the in-memory model.
pub async fn recreate(conn: &Arc<dyn Connection>, schema: &Schema) -> Result<()> {
    let result = conn
        .query(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
            &[],
        )
        .await?;

    for row in &result.rows {
        if let Some(name) = row.get(0).and_then(|v| v.as_str()) {
            tracing::debug!(table = %name, "dropping stale table");
            conn.execute(&DdlGenerator::generate_drop_table(name), &[])
                .await?;
        }
    }

    apply_schema(conn, schema).await
}
