//! `ITableStore`: mapping-style access to one bound table.
//!
//! The SQLite implementation lives in `dbwrap-storage`. The trait is
//! object-safe, `Send + Sync`, and has a blanket `Arc<T>` impl.

use std::sync::Arc;

use crate::errors::WrapResult;
use crate::types::assignment::FieldAssignment;
use crate::types::constraint::Constraints;
use crate::types::schema::TableSchema;
use crate::types::statement::{BatchResult, Statement};
use crate::types::value::Value;

pub trait ITableStore: Send + Sync {
    /// The bound table's columns, loaded on first use and cached.
    fn columns(&self) -> WrapResult<TableSchema>;

    /// Drop the cached schema and load it again.
    fn refresh_schema(&self) -> WrapResult<TableSchema>;

    /// Validate and insert one row. Returns the executed statement.
    fn insert(&self, assignment: &FieldAssignment) -> WrapResult<Statement>;

    /// Insert many rows in one transaction, skipping rows that name
    /// unknown columns.
    fn insert_all(&self, assignments: &[FieldAssignment]) -> WrapResult<BatchResult>;

    /// `SELECT <projection> FROM <table> WHERE <constraints>`.
    fn read(&self, projection: &[&str], constraints: &Constraints) -> WrapResult<Vec<Vec<Value>>>;

    /// Run SQL with no validation at all.
    fn raw(&self, sql: &str) -> WrapResult<Vec<Vec<Value>>>;
}

// ─── Arc blanket impl ───────────────────────────────────────────────

impl<T: ITableStore + ?Sized> ITableStore for Arc<T> {
    fn columns(&self) -> WrapResult<TableSchema> {
        (**self).columns()
    }
    fn refresh_schema(&self) -> WrapResult<TableSchema> {
        (**self).refresh_schema()
    }
    fn insert(&self, assignment: &FieldAssignment) -> WrapResult<Statement> {
        (**self).insert(assignment)
    }
    fn insert_all(&self, assignments: &[FieldAssignment]) -> WrapResult<BatchResult> {
        (**self).insert_all(assignments)
    }
    fn read(&self, projection: &[&str], constraints: &Constraints) -> WrapResult<Vec<Vec<Value>>> {
        (**self).read(projection, constraints)
    }
    fn raw(&self, sql: &str) -> WrapResult<Vec<Vec<Value>>> {
        (**self).raw(sql)
    }
}
