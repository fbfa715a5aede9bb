use tracing::debug;

use dbwrap_core::errors::WrapResult;
use dbwrap_core::types::assignment::FieldAssignment;
use dbwrap_core::types::statement::Statement;

use super::QueryBuilder;

pub(super) fn build(qb: &QueryBuilder<'_>, assignment: &FieldAssignment) -> WrapResult<Statement> {
    let mut columns = Vec::with_capacity(assignment.len());
    let mut args = Vec::with_capacity(assignment.len());
    for (name, value) in assignment.iter() {
        qb.check_column(name)?;
        columns.push(name);
        args.push(value.clone());
    }

    // `INSERT INTO t() VALUES ()` is not valid SQL.
    let sql = if columns.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES", qb.table)
    } else {
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {}({}) VALUES ({placeholders})",
            qb.table,
            columns.join(", ")
        )
    };

    debug!(sql = %sql, args = args.len(), "built insert");
    Ok(Statement::new(sql, args))
}
