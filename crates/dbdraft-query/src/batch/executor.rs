//! Script executor implementation
//!
//! Executes a raw SQL blob as one transactional batch. Every failure
//! mode becomes data in the returned outcome; nothing escapes to the
//! caller as an error, so the presentation layer always has something
//! to display.

use std::sync::Arc;

use dbdraft_core::{Connection, QueryResult, Row, Value};

use crate::splitter::split_statements;

/// Outcome of executing one SQL script.
///
/// `columns == None` marks an informational outcome (status or error
/// message) carried in a single row; `columns == Some(..)` marks
/// genuine query results, possibly with zero rows.
#[derive(Debug, Clone)]
pub struct ScriptOutcome {
    /// Column names of the surfaced query result, if any
    pub columns: Option<Vec<String>>,
    /// Result rows, or exactly one message row
    pub rows: Vec<Row>,
}

impl ScriptOutcome {
    /// Create an informational outcome carrying a single message row
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            columns: None,
            rows: vec![Row::new(Vec::new(), vec![Value::String(text.into())])],
        }
    }

    /// Create an outcome surfacing a query result
    pub fn from_query(result: QueryResult) -> Self {
        Self {
            columns: Some(result.column_names()),
            rows: result.rows,
        }
    }

    /// Whether this outcome carries genuine query results
    pub fn is_query(&self) -> bool {
        self.columns.is_some()
    }

    /// The message text of an informational outcome
    pub fn message_text(&self) -> Option<&str> {
        if self.columns.is_some() {
            return None;
        }
        self.rows.first().and_then(|r| r.get(0)).and_then(|v| v.as_str())
    }
}

/// Execute a raw SQL blob as a single transactional batch.
///
/// The blob is split into statements which run strictly in order. The
/// last row-returning statement's result is surfaced; statements that
/// return no rows contribute to a running affected-row count instead.
/// On success the transaction commits; on the first error it rolls back
/// entirely and the error message becomes the outcome.
pub async fn execute_script(conn: &Arc<dyn Connection>, sql: &str) -> ScriptOutcome {
    if sql.trim().is_empty() {
        return ScriptOutcome::message("No SQL");
    }

    let statements = split_statements(sql);
    if statements.is_empty() {
        return ScriptOutcome::message("No valid SQL statements");
    }

    tracing::debug!(statement_count = statements.len(), "executing SQL script");

    let tx = match conn.begin_transaction().await {
        Ok(tx) => tx,
        Err(e) => return ScriptOutcome::message(format!("SQL Error: {}", e)),
    };

    let mut last_query: Option<QueryResult> = None;
    let mut total_affected: u64 = 0;

    for statement in &statements {
        match tx.run(statement).await {
            Ok(result) => {
                if result.is_query {
                    // Only the last row-returning statement is surfaced
                    last_query = result.result;
                } else {
                    total_affected += result.affected_rows;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "statement failed, rolling back batch");
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, "rollback after failed statement also failed");
                }
                return ScriptOutcome::message(format!("SQL Error: {}", e));
            }
        }
    }

    if let Err(e) = tx.commit().await {
        return ScriptOutcome::message(format!("SQL Error: {}", e));
    }

    match last_query {
        Some(result) => ScriptOutcome::from_query(result),
        None => ScriptOutcome::message(format!("Success: {} rows affected", total_affected)),
    }
}
