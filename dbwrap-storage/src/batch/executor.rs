//! All items share one transaction and are committed together.
//!
//! An item that names an unknown column is skipped and reported; the rest
//! of the batch continues. A store failure is not skipped: it aborts the
//! batch and the transaction rolls back on drop, so nothing from the batch
//! is kept.

use rusqlite::Connection;
use tracing::{info, warn};

use dbwrap_core::errors::{WrapError, WrapResult};
use dbwrap_core::types::assignment::FieldAssignment;
use dbwrap_core::types::statement::BatchResult;

use crate::exec;
use crate::query::QueryBuilder;

pub fn insert_all(
    conn: &Connection,
    builder: &QueryBuilder<'_>,
    assignments: &[FieldAssignment],
) -> WrapResult<BatchResult> {
    // A bad table name would fail every item; report it once instead.
    builder.check_table()?;

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| WrapError::StoreExecution {
            message: format!("begin transaction: {e}"),
        })?;

    let mut result = BatchResult::default();
    for (position, assignment) in assignments.iter().enumerate() {
        let index = position + 1;
        result.attempted += 1;

        let stmt = match builder.insert(assignment) {
            Ok(stmt) => stmt,
            Err(e) if e.is_validation() => {
                warn!(index, error = %e, "skipping entry due to bad field");
                result.skipped.push(index);
                continue;
            }
            Err(e) => return Err(e),
        };

        exec::execute(&tx, &stmt)?;
        result.inserted += 1;
        result.last_statement = Some(stmt);
    }

    tx.commit().map_err(|e| WrapError::StoreExecution {
        message: format!("commit: {e}"),
    })?;

    info!(
        table = builder.table(),
        attempted = result.attempted,
        inserted = result.inserted,
        skipped = result.skipped.len(),
        "batch insert committed"
    );
    Ok(result)
}
