//! Shared fixtures: a file-backed `flights` table in a temp directory.

#![allow(dead_code)]

use std::path::Path;

use dbwrap_core::config::{TableBinding, WrapConfig};
use dbwrap_storage::TableWrapper;
use rusqlite::Connection;
use tempfile::TempDir;

pub const FLIGHTS_DDL: &str = "CREATE TABLE flights (
    id INTEGER PRIMARY KEY,
    flightid INTEGER NOT NULL,
    time TEXT,
    lat REAL,
    long REAL,
    source TEXT DEFAULT 'adsb'
)";

pub fn create_db(path: &Path, ddl: &str) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(ddl).unwrap();
}

pub fn binding(dir: &TempDir, table: &str) -> TableBinding {
    WrapConfig::new(dir.path().join("test.db"), table)
        .binding()
        .unwrap()
}

/// Temp dir + wrapper bound to a freshly created `flights` table.
pub fn flights_wrapper() -> (TempDir, TableWrapper) {
    let dir = TempDir::new().unwrap();
    create_db(&dir.path().join("test.db"), FLIGHTS_DDL);
    let wrapper = TableWrapper::new(binding(&dir, "flights"));
    (dir, wrapper)
}

pub fn count_rows(dir: &TempDir, table: &str) -> i64 {
    let conn = Connection::open(dir.path().join("test.db")).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}
