//! Schema-validated statement building.
//!
//! Only identifiers are written into the SQL text: the table name (trusted
//! by contract) and column names that matched the introspected schema.
//! Values always travel as positional `?` arguments.

pub mod ident;
mod insert;
mod select;

use rustc_hash::FxHashSet;

use dbwrap_core::errors::{WrapError, WrapResult};
use dbwrap_core::types::assignment::FieldAssignment;
use dbwrap_core::types::constraint::Constraints;
use dbwrap_core::types::schema::TableSchema;
use dbwrap_core::types::statement::Statement;

/// Builds statements for one table against its schema.
pub struct QueryBuilder<'a> {
    table: &'a str,
    names: FxHashSet<&'a str>,
    strict_identifiers: bool,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(table: &'a str, schema: &'a TableSchema) -> Self {
        Self {
            table,
            names: schema.column_names(),
            strict_identifiers: false,
        }
    }

    /// Also require the table and every column to be a plain identifier.
    pub fn strict_identifiers(mut self, on: bool) -> Self {
        self.strict_identifiers = on;
        self
    }

    pub fn table(&self) -> &str {
        self.table
    }

    /// `INSERT INTO <table>(<cols>) VALUES (?, ...)`.
    pub fn insert(&self, assignment: &FieldAssignment) -> WrapResult<Statement> {
        self.check_table()?;
        insert::build(self, assignment)
    }

    /// `SELECT <projection> FROM <table> [WHERE <constraints>]`.
    pub fn select(&self, projection: &[&str], constraints: &Constraints) -> WrapResult<Statement> {
        self.check_table()?;
        select::build(self, projection, constraints)
    }

    /// Strict-mode check of the table name; a no-op otherwise.
    pub fn check_table(&self) -> WrapResult<()> {
        if self.strict_identifiers {
            ident::check_identifier(self.table)?;
        }
        Ok(())
    }

    fn check_column(&self, name: &str) -> WrapResult<()> {
        if !self.names.contains(name) {
            return Err(WrapError::unknown_column(name));
        }
        if self.strict_identifiers {
            ident::check_identifier(name)?;
        }
        Ok(())
    }
}

/// Build an insert with the default (trusting) identifier policy.
pub fn build_insert(
    table: &str,
    schema: &TableSchema,
    assignment: &FieldAssignment,
) -> WrapResult<Statement> {
    QueryBuilder::new(table, schema).insert(assignment)
}

/// Build a select with the default (trusting) identifier policy.
pub fn build_select(
    table: &str,
    schema: &TableSchema,
    projection: &[&str],
    constraints: &Constraints,
) -> WrapResult<Statement> {
    QueryBuilder::new(table, schema).select(projection, constraints)
}
