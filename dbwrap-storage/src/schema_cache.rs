//! Table introspection and the per-binding schema cache.

use std::sync::{Arc, Mutex, PoisonError};

use rusqlite::Connection;
use tracing::info;

use dbwrap_core::errors::{WrapError, WrapResult};
use dbwrap_core::types::schema::{ColumnInfo, TableSchema};

/// Read `table`'s columns with `PRAGMA table_info`.
///
/// `table` is interpolated as given; a `schema.name` table is introspected
/// as `PRAGMA schema.table_info(name)`. A table with no columns does not
/// exist as far as SQLite is concerned, so that is reported as unavailable.
pub fn load_schema(conn: &Connection, table: &str) -> WrapResult<TableSchema> {
    let unavailable = |message: String| WrapError::SchemaUnavailable {
        table: table.to_string(),
        message,
    };

    let pragma = match table.split_once('.') {
        Some((schema, name)) => format!("PRAGMA {schema}.table_info({name})"),
        None => format!("PRAGMA table_info({table})"),
    };
    let mut stmt = conn
        .prepare(&pragma)
        .map_err(|e| unavailable(e.to_string()))?;

    // cid, name, type, notnull, dflt_value, pk
    let rows = stmt
        .query_map([], |row| {
            Ok(ColumnInfo {
                name: row.get(1)?,
                decl_type: row.get(2)?,
                default: row.get(4)?,
            })
        })
        .map_err(|e| unavailable(e.to_string()))?;

    let mut columns = Vec::new();
    for row in rows {
        columns.push(row.map_err(|e| unavailable(e.to_string()))?);
    }
    if columns.is_empty() {
        return Err(unavailable("no such table".to_string()));
    }

    info!(table, columns = columns.len(), "loaded table schema");
    Ok(TableSchema::new(table, columns))
}

/// Holds one table's schema once it has been loaded.
///
/// Nothing invalidates the entry automatically; if the table changes shape
/// the owner must call [`SchemaCache::invalidate`] or reload explicitly.
#[derive(Debug, Default)]
pub struct SchemaCache {
    slot: Mutex<Option<Arc<TableSchema>>>,
}

impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached schema, or the result of `load` stored for next time.
    pub fn get_or_load<F>(&self, load: F) -> WrapResult<Arc<TableSchema>>
    where
        F: FnOnce() -> WrapResult<TableSchema>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(schema) = slot.as_ref() {
            return Ok(Arc::clone(schema));
        }
        let schema = Arc::new(load()?);
        *slot = Some(Arc::clone(&schema));
        Ok(schema)
    }

    /// Replace the cached entry with a fresh load. On failure the cache is
    /// left empty.
    pub fn refresh<F>(&self, load: F) -> WrapResult<Arc<TableSchema>>
    where
        F: FnOnce() -> WrapResult<TableSchema>,
    {
        self.invalidate();
        self.get_or_load(load)
    }

    pub fn invalidate(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn cached(&self) -> Option<Arc<TableSchema>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
