//! `TableWrapper`: the SQLite implementation of `ITableStore`.
//!
//! Owns one `{database, table}` binding and that table's schema cache.
//! Every operation opens its own connection and closes it on return.
//! Wrappers are independent; several may point at different tables, or
//! at the same one.

use std::sync::Arc;

use rusqlite::Connection;

use dbwrap_core::config::{TableBinding, WrapConfig};
use dbwrap_core::errors::WrapResult;
use dbwrap_core::traits::ITableStore;
use dbwrap_core::types::assignment::FieldAssignment;
use dbwrap_core::types::constraint::Constraints;
use dbwrap_core::types::schema::TableSchema;
use dbwrap_core::types::statement::{BatchResult, Statement};
use dbwrap_core::types::value::Value;

use crate::query::{ident, QueryBuilder};
use crate::schema_cache::{load_schema, SchemaCache};
use crate::{batch, connection, exec};

pub struct TableWrapper {
    binding: TableBinding,
    schema: SchemaCache,
}

impl TableWrapper {
    pub fn new(binding: TableBinding) -> Self {
        Self {
            binding,
            schema: SchemaCache::new(),
        }
    }

    /// Resolve the binding from config. Fails with `Configuration` when the
    /// database path or table name is missing.
    pub fn from_config(config: &WrapConfig) -> WrapResult<Self> {
        Ok(Self::new(config.binding()?))
    }

    pub fn binding(&self) -> &TableBinding {
        &self.binding
    }

    pub fn table(&self) -> &str {
        &self.binding.table
    }

    /// Required/optional column listing of the bound table.
    pub fn describe(&self) -> WrapResult<String> {
        let schema = self.schema()?;
        Ok(schema.report().to_string())
    }

    /// Validate and build an insert without executing it.
    pub fn build_insert(&self, assignment: &FieldAssignment) -> WrapResult<Statement> {
        let schema = self.schema()?;
        self.builder(&schema).insert(assignment)
    }

    /// Validate and build a select without executing it.
    pub fn build_select(&self, projection: &[&str], constraints: &Constraints) -> WrapResult<Statement> {
        let schema = self.schema()?;
        self.builder(&schema).select(projection, constraints)
    }

    /// Run `f` on a raw connection to the bound database.
    pub fn with_connection<F, T>(&self, f: F) -> WrapResult<T>
    where
        F: FnOnce(&Connection) -> WrapResult<T>,
    {
        connection::with_connection(&self.binding, f)
    }

    fn schema(&self) -> WrapResult<Arc<TableSchema>> {
        if let Some(schema) = self.schema.cached() {
            return Ok(schema);
        }
        self.with_connection(|conn| self.schema_on(conn))
    }

    fn schema_on(&self, conn: &Connection) -> WrapResult<Arc<TableSchema>> {
        self.schema.get_or_load(|| self.introspect(conn))
    }

    fn introspect(&self, conn: &Connection) -> WrapResult<TableSchema> {
        // The table name goes into the PRAGMA text too.
        if self.binding.strict_identifiers {
            ident::check_identifier(&self.binding.table)?;
        }
        load_schema(conn, &self.binding.table)
    }

    fn builder<'a>(&'a self, schema: &'a TableSchema) -> QueryBuilder<'a> {
        QueryBuilder::new(&self.binding.table, schema)
            .strict_identifiers(self.binding.strict_identifiers)
    }
}

impl ITableStore for TableWrapper {
    fn columns(&self) -> WrapResult<TableSchema> {
        Ok(self.schema()?.as_ref().clone())
    }

    fn refresh_schema(&self) -> WrapResult<TableSchema> {
        let schema = self.with_connection(|conn| self.schema.refresh(|| self.introspect(conn)))?;
        Ok(schema.as_ref().clone())
    }

    fn insert(&self, assignment: &FieldAssignment) -> WrapResult<Statement> {
        self.with_connection(|conn| {
            let schema = self.schema_on(conn)?;
            let stmt = self.builder(&schema).insert(assignment)?;
            exec::execute(conn, &stmt)?;
            Ok(stmt)
        })
    }

    fn insert_all(&self, assignments: &[FieldAssignment]) -> WrapResult<BatchResult> {
        self.with_connection(|conn| {
            let schema = self.schema_on(conn)?;
            batch::insert_all(conn, &self.builder(&schema), assignments)
        })
    }

    fn read(&self, projection: &[&str], constraints: &Constraints) -> WrapResult<Vec<Vec<Value>>> {
        self.with_connection(|conn| {
            let schema = self.schema_on(conn)?;
            let stmt = self.builder(&schema).select(projection, constraints)?;
            exec::query(conn, &stmt)
        })
    }

    fn raw(&self, sql: &str) -> WrapResult<Vec<Vec<Value>>> {
        self.with_connection(|conn| exec::query_raw(conn, sql))
    }
}
