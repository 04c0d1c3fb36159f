//! SQLite connection implementation

use async_trait::async_trait;
use dbdraft_core::{
    ColumnMeta, Connection, DbDraftError, QueryResult, Result, Row, StatementResult, Transaction,
    Value,
};
use parking_lot::Mutex;
use rusqlite::{Connection as RusqliteConnection, OpenFlags, params_from_iter};
use std::sync::Arc;

/// SQLite connection wrapper
pub struct SqliteConnection {
    conn: Arc<Mutex<RusqliteConnection>>,
}

impl SqliteConnection {
    /// Open a SQLite database
    pub fn open(path: &str) -> Result<Self> {
        tracing::info!(path = %path, "opening SQLite database");

        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = if path == ":memory:" {
            RusqliteConnection::open_in_memory().map_err(|e| {
                DbDraftError::Connection(format!("Failed to open in-memory database: {}", e))
            })?
        } else {
            RusqliteConnection::open_with_flags(path, flags).map_err(|e| {
                DbDraftError::Connection(format!(
                    "Failed to open SQLite database at '{}': {}",
                    path, e
                ))
            })?
        };

        // Enable foreign keys (PRAGMA commands return results, so use pragma_update)
        conn.pragma_update(None, "foreign_keys", "ON").map_err(|e| {
            DbDraftError::Connection(format!("Failed to enable foreign keys: {}", e))
        })?;

        tracing::info!(path = %path, "SQLite database connection established");
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl Connection for SqliteConnection {
    fn driver_name(&self) -> &str {
        "sqlite"
    }

    #[tracing::instrument(skip(self, sql, params), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<StatementResult> {
        let conn = self.conn.lock();
        execute_on(&conn, sql, params)
    }

    #[tracing::instrument(skip(self, sql, params), fields(sql_preview = %sql.chars().take(100).collect::<String>()))]
    async fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        let conn = self.conn.lock();
        query_on(&conn, sql, params)
    }

    async fn begin_transaction(&self) -> Result<Box<dyn Transaction>> {
        tracing::debug!("beginning SQLite transaction");
        {
            let conn = self.conn.lock();
            // DEFERRED means the write lock is only acquired when the first write occurs,
            // which matches the typical behaviour expected from a default transaction.
            conn.execute_batch("BEGIN DEFERRED").map_err(|e| {
                DbDraftError::Query(format!("Failed to begin transaction: {}", e))
            })?;
        }
        tracing::debug!("SQLite transaction started");
        Ok(Box::new(SqliteTransaction {
            conn: Arc::clone(&self.conn),
            committed: false,
            rolled_back: false,
        }))
    }

    async fn close(&self) -> Result<()> {
        tracing::info!("closing SQLite connection");
        Ok(())
    }

    fn is_closed(&self) -> bool {
        false
    }
}

/// SQLite transaction wrapper.
///
/// Issues raw `BEGIN DEFERRED` / `COMMIT` / `ROLLBACK` SQL so that it can share
/// the connection `Arc<Mutex<…>>` without running into rusqlite's borrow-based
/// transaction lifetime requirements.
pub struct SqliteTransaction {
    conn: Arc<Mutex<RusqliteConnection>>,
    committed: bool,
    rolled_back: bool,
}

impl Drop for SqliteTransaction {
    fn drop(&mut self) {
        // If the transaction is abandoned without an explicit commit/rollback, issue a
        // best-effort rollback so the connection is left in a clean state.
        if !self.committed && !self.rolled_back {
            tracing::warn!(
                "SQLite transaction dropped without commit or rollback, issuing automatic rollback"
            );
            let conn = self.conn.lock();
            if let Err(e) = conn.execute_batch("ROLLBACK") {
                tracing::error!(error = %e, "automatic rollback on drop failed");
            }
        }
    }
}

#[async_trait]
impl Transaction for SqliteTransaction {
    async fn commit(mut self: Box<Self>) -> Result<()> {
        tracing::debug!("committing SQLite transaction");

        if self.rolled_back {
            return Err(DbDraftError::Query("Transaction already rolled back".into()));
        }
        if self.committed {
            return Err(DbDraftError::Query("Transaction already committed".into()));
        }

        {
            let conn = self.conn.lock();
            conn.execute_batch("COMMIT")
                .map_err(|e| DbDraftError::Query(format!("Failed to commit transaction: {}", e)))?;
        }

        self.committed = true;
        tracing::debug!("SQLite transaction committed successfully");
        Ok(())
    }

    async fn rollback(mut self: Box<Self>) -> Result<()> {
        tracing::debug!("rolling back SQLite transaction");

        if self.committed {
            return Err(DbDraftError::Query("Transaction already committed".into()));
        }
        if self.rolled_back {
            return Ok(());
        }

        {
            let conn = self.conn.lock();
            conn.execute_batch("ROLLBACK").map_err(|e| {
                DbDraftError::Query(format!("Failed to rollback transaction: {}", e))
            })?;
        }

        self.rolled_back = true;
        tracing::debug!("SQLite transaction rolled back successfully");
        Ok(())
    }

    async fn query(&self, sql: &str, params: &[Value]) -> Result<QueryResult> {
        tracing::debug!(sql_preview = %sql.chars().take(100).collect::<String>(), "executing query in SQLite transaction");
        let conn = self.conn.lock();
        query_on(&conn, sql, params)
    }

    async fn execute(&self, sql: &str, params: &[Value]) -> Result<StatementResult> {
        tracing::debug!(sql_preview = %sql.chars().take(100).collect::<String>(), "executing statement in SQLite transaction");
        let conn = self.conn.lock();
        execute_on(&conn, sql, params)
    }

    async fn run(&self, sql: &str) -> Result<StatementResult> {
        tracing::debug!(sql_preview = %sql.chars().take(100).collect::<String>(), "running statement in SQLite transaction");
        let conn = self.conn.lock();
        run_on(&conn, sql)
    }
}

/// Execute a row-returning query and collect the full result set.
fn query_on(conn: &RusqliteConnection, sql: &str, params: &[Value]) -> Result<QueryResult> {
    let start_time = std::time::Instant::now();
    let rusqlite_params = values_to_rusqlite(params);

    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| DbDraftError::Query(format!("Failed to prepare query: {}", e)))?;

    let (column_names, columns) = column_metadata(&stmt);

    let mut rows = Vec::new();
    let mut query_rows = stmt
        .query(params_from_iter(rusqlite_params.iter()))
        .map_err(|e| DbDraftError::Query(format!("Failed to execute query: {}", e)))?;

    while let Some(row) = query_rows
        .next()
        .map_err(|e| DbDraftError::Query(format!("Failed to fetch row: {}", e)))?
    {
        let mut values = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            values.push(rusqlite_to_value(row, i)?);
        }
        rows.push(Row::new(column_names.clone(), values));
    }

    let execution_time_ms = start_time.elapsed().as_millis() as u64;

    tracing::debug!(
        row_count = rows.len(),
        execution_time_ms = execution_time_ms,
        "query executed successfully"
    );
    Ok(QueryResult {
        id: uuid::Uuid::new_v4(),
        columns,
        rows,
        execution_time_ms,
    })
}

/// Execute a non-row-returning statement.
fn execute_on(conn: &RusqliteConnection, sql: &str, params: &[Value]) -> Result<StatementResult> {
    let rusqlite_params = values_to_rusqlite(params);

    let rows_affected = conn
        .execute(sql, params_from_iter(rusqlite_params.iter()))
        .map_err(|e| DbDraftError::Query(format!("Failed to execute statement: {}", e)))?;

    tracing::debug!(affected_rows = rows_affected, "statement executed");
    Ok(StatementResult {
        is_query: false,
        result: None,
        affected_rows: rows_affected as u64,
    })
}

/// Run one statement, classifying it by its column metadata.
///
/// Preparing the statement exposes its column count before execution
/// (sqlite3_column_count); a non-zero count marks a row-returning query,
/// the same signal a cursor descriptor gives.
fn run_on(conn: &RusqliteConnection, sql: &str) -> Result<StatementResult> {
    let column_count = {
        let stmt = conn
            .prepare(sql)
            .map_err(|e| DbDraftError::Query(format!("Failed to prepare statement: {}", e)))?;
        stmt.column_count()
    };

    if column_count > 0 {
        let result = query_on(conn, sql, &[])?;
        Ok(StatementResult {
            is_query: true,
            result: Some(result),
            affected_rows: 0,
        })
    } else {
        execute_on(conn, sql, &[])
    }
}

/// Collect the column names and metadata of a prepared statement.
fn column_metadata(stmt: &rusqlite::Statement<'_>) -> (Vec<String>, Vec<ColumnMeta>) {
    let column_count = stmt.column_count();
    let mut column_names: Vec<String> = Vec::with_capacity(column_count);
    let mut columns: Vec<ColumnMeta> = Vec::with_capacity(column_count);

    // stmt.columns() exposes the declared type from CREATE TABLE where known
    for (idx, col) in stmt.columns().iter().enumerate() {
        let name = col.name().to_string();
        let data_type = col.decl_type().unwrap_or("DYNAMIC").to_string();

        column_names.push(name.clone());
        columns.push(ColumnMeta {
            name,
            data_type,
            nullable: true,
            ordinal: idx,
        });
    }

    (column_names, columns)
}

/// Convert our Value types to rusqlite-compatible types
fn values_to_rusqlite(values: &[Value]) -> Vec<rusqlite::types::Value> {
    values.iter().map(value_to_rusqlite).collect()
}

fn value_to_rusqlite(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Bool(b) => rusqlite::types::Value::Integer(if *b { 1 } else { 0 }),
        Value::Int64(i) => rusqlite::types::Value::Integer(*i),
        Value::Float64(f) => rusqlite::types::Value::Real(*f),
        Value::String(s) => rusqlite::types::Value::Text(s.clone()),
        Value::Bytes(b) => rusqlite::types::Value::Blob(b.clone()),
        Value::Date(d) => rusqlite::types::Value::Text(d.to_string()),
        Value::DateTime(dt) => rusqlite::types::Value::Text(dt.to_string()),
        Value::Json(j) => rusqlite::types::Value::Text(j.to_string()),
    }
}

/// Convert rusqlite row value to our Value type
fn rusqlite_to_value(row: &rusqlite::Row, idx: usize) -> Result<Value> {
    use rusqlite::types::ValueRef;

    let value_ref = row
        .get_ref(idx)
        .map_err(|e| DbDraftError::Query(e.to_string()))?;

    let value = match value_ref {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Int64(i),
        ValueRef::Real(f) => Value::Float64(f),
        ValueRef::Text(s) => Value::String(String::from_utf8_lossy(s).to_string()),
        ValueRef::Blob(b) => Value::Bytes(b.to_vec()),
    };

    Ok(value)
}
