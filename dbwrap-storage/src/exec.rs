//! Statement execution with positional binding.

use rusqlite::{params_from_iter, Connection, Row};
use tracing::debug;

use dbwrap_core::errors::{WrapError, WrapResult};
use dbwrap_core::types::statement::Statement;
use dbwrap_core::types::value::Value;

/// Execute a non-query statement. Returns the number of changed rows.
pub fn execute(conn: &Connection, stmt: &Statement) -> WrapResult<usize> {
    debug!(sql = stmt.sql(), args = stmt.args().len(), "execute");
    let mut prepared = conn.prepare_cached(stmt.sql()).map_err(WrapError::store)?;
    prepared
        .execute(params_from_iter(stmt.args()))
        .map_err(WrapError::store)
}

/// Run a statement and collect every row as values.
pub fn query(conn: &Connection, stmt: &Statement) -> WrapResult<Vec<Vec<Value>>> {
    debug!(sql = stmt.sql(), args = stmt.args().len(), "query");
    let mut prepared = conn.prepare(stmt.sql()).map_err(WrapError::store)?;
    let width = prepared.column_count();
    let rows = prepared
        .query_map(params_from_iter(stmt.args()), |row| row_values(row, width))
        .map_err(WrapError::store)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(WrapError::store)?);
    }
    Ok(result)
}

/// Run one SQL statement as written, with no arguments and no checks.
pub fn query_raw(conn: &Connection, sql: &str) -> WrapResult<Vec<Vec<Value>>> {
    query(conn, &Statement::new(sql.to_string(), Vec::new()))
}

fn row_values(row: &Row<'_>, width: usize) -> rusqlite::Result<Vec<Value>> {
    (0..width).map(|i| row.get(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_returns_rows_in_column_order() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (a INTEGER, b TEXT); INSERT INTO t VALUES (1, 'x'), (2, NULL);")
            .unwrap();
        let rows = query_raw(&conn, "SELECT a, b FROM t ORDER BY a").unwrap();
        assert_eq!(
            rows,
            vec![
                vec![Value::Integer(1), Value::Text("x".into())],
                vec![Value::Integer(2), Value::Null],
            ]
        );
    }

    #[test]
    fn store_failure_is_execution_error() {
        let conn = Connection::open_in_memory().unwrap();
        let stmt = Statement::new("INSERT INTO missing(a) VALUES (?)".into(), vec![Value::Integer(1)]);
        let err = execute(&conn, &stmt).unwrap_err();
        assert!(matches!(err, WrapError::StoreExecution { .. }));
        assert!(!err.is_validation());
    }
}
