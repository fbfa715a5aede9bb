use tracing::debug;

use dbwrap_core::errors::{WrapError, WrapResult};
use dbwrap_core::types::constraint::Constraints;
use dbwrap_core::types::statement::Statement;

use super::QueryBuilder;

pub(super) fn build(
    qb: &QueryBuilder<'_>,
    projection: &[&str],
    constraints: &Constraints,
) -> WrapResult<Statement> {
    for name in projection {
        qb.check_column(name)?;
    }

    let mut clauses = Vec::with_capacity(constraints.len());
    let mut args = Vec::with_capacity(constraints.value_count());
    for (name, alternatives) in constraints.iter() {
        qb.check_column(name)?;
        if alternatives.is_empty() {
            return Err(WrapError::EmptyConstraint {
                name: name.to_string(),
            });
        }
        let ors: Vec<String> = alternatives
            .as_slice()
            .iter()
            .map(|_| format!("{name}==?"))
            .collect();
        clauses.push(format!("({})", ors.join(" OR ")));
        args.extend(alternatives.as_slice().iter().cloned());
    }

    let columns = if projection.is_empty() {
        "*".to_string()
    } else {
        projection.join(", ")
    };
    let mut sql = format!("SELECT {columns} FROM {}", qb.table);
    // No constraints means an unconditioned read, not a dangling WHERE.
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    debug!(sql = %sql, args = args.len(), "built select");
    Ok(Statement::new(sql, args))
}

#[cfg(test)]
mod tests {
    use dbwrap_core::types::schema::{ColumnInfo, TableSchema};
    use dbwrap_core::types::value::Value;

    use super::*;

    fn schema() -> TableSchema {
        TableSchema::new(
            "T",
            vec![
                ColumnInfo::new("id", "INTEGER", None),
                ColumnInfo::new("lat", "REAL", None),
                ColumnInfo::new("long", "REAL", None),
            ],
        )
    }

    #[test]
    fn or_within_key_and_across_keys() {
        let s = schema();
        let c = Constraints::new().any_of("id", [1, 2]).eq("lat", 30.35);
        let stmt = QueryBuilder::new("T", &s).select(&["long"], &c).unwrap();
        assert_eq!(
            stmt.sql(),
            "SELECT long FROM T WHERE (id==? OR id==?) AND (lat==?)"
        );
        assert_eq!(
            stmt.args(),
            &[Value::Integer(1), Value::Integer(2), Value::Float(30.35)]
        );
    }

    #[test]
    fn no_constraints_means_no_where() {
        let s = schema();
        let stmt = QueryBuilder::new("T", &s)
            .select(&["id", "lat"], &Constraints::new())
            .unwrap();
        assert_eq!(stmt.sql(), "SELECT id, lat FROM T");
        assert!(stmt.args().is_empty());
    }

    #[test]
    fn empty_projection_selects_all() {
        let s = schema();
        let stmt = QueryBuilder::new("T", &s)
            .select(&[], &Constraints::new().eq("id", 4))
            .unwrap();
        assert_eq!(stmt.sql(), "SELECT * FROM T WHERE (id==?)");
    }

    #[test]
    fn projection_is_validated_before_constraints() {
        let s = schema();
        let c = Constraints::new().eq("bogus_key", 1);
        let err = QueryBuilder::new("T", &s).select(&["bogus_col"], &c).unwrap_err();
        assert!(matches!(err, WrapError::UnknownColumn { ref name } if name == "bogus_col"));
    }

    #[test]
    fn empty_alternatives_rejected() {
        let s = schema();
        let c = Constraints::new().any_of("id", Vec::<i64>::new());
        let err = QueryBuilder::new("T", &s).select(&["id"], &c).unwrap_err();
        assert!(matches!(err, WrapError::EmptyConstraint { ref name } if name == "id"));
    }
}
