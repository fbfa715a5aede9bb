//! Per-operation SQLite connections.
//!
//! A connection lives for one logical operation (a statement or a whole
//! batch) and is closed when it is dropped, on success and error alike.

use rusqlite::{Connection, OpenFlags};

use dbwrap_core::config::TableBinding;
use dbwrap_core::errors::{WrapError, WrapResult};

/// Open a connection for `binding`.
///
/// Failure to open counts as the table's schema being unavailable.
pub fn open(binding: &TableBinding) -> WrapResult<Connection> {
    let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    if binding.create_if_missing {
        flags |= OpenFlags::SQLITE_OPEN_CREATE;
    }

    let conn = Connection::open_with_flags(&binding.db_path, flags).map_err(|e| {
        WrapError::SchemaUnavailable {
            table: binding.table.clone(),
            message: format!("cannot open {}: {e}", binding.db_path.display()),
        }
    })?;
    conn.busy_timeout(binding.busy_timeout)
        .map_err(WrapError::store)?;
    Ok(conn)
}

/// Run `f` with a fresh connection for `binding`.
pub fn with_connection<F, T>(binding: &TableBinding, f: F) -> WrapResult<T>
where
    F: FnOnce(&Connection) -> WrapResult<T>,
{
    if binding.table.is_empty() || binding.db_path.as_os_str().is_empty() {
        return Err(WrapError::Configuration {
            message: "both db_path and table_name must be set".to_string(),
        });
    }
    let conn = open(binding)?;
    f(&conn)
}
