//! Table metadata as reported by the store.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// One column of the bound table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, possibly empty (SQLite allows untyped columns).
    pub decl_type: String,
    /// Raw default expression, `None` when the column has no default.
    pub default: Option<String>,
}

impl ColumnInfo {
    pub fn new(name: &str, decl_type: &str, default: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            decl_type: decl_type.to_string(),
            default: default.map(str::to_string),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Ordered column list of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub table: String,
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(table: &str, columns: Vec<ColumnInfo>) -> Self {
        Self {
            table: table.to_string(),
            columns,
        }
    }

    /// Column names as a set, for membership tests.
    pub fn column_names(&self) -> FxHashSet<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Columns without a default, with their table position.
    pub fn required(&self) -> impl Iterator<Item = (usize, &ColumnInfo)> {
        self.columns.iter().enumerate().filter(|(_, c)| !c.has_default())
    }

    /// Columns with a default, with their table position.
    pub fn optional(&self) -> impl Iterator<Item = (usize, &ColumnInfo)> {
        self.columns.iter().enumerate().filter(|(_, c)| c.has_default())
    }

    pub fn report(&self) -> ColumnReport<'_> {
        ColumnReport { schema: self }
    }
}

/// Human-readable listing of a schema, split into columns a caller must
/// supply and columns that fall back to a default.
///
/// The leading number on each line is the column's position in the table.
pub struct ColumnReport<'a> {
    schema: &'a TableSchema,
}

impl fmt::Display for ColumnReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Columns of {}:", self.schema.table)?;
        writeln!(f, ".........Required Arguments:")?;
        for (idx, col) in self.schema.required() {
            writeln!(f, "{idx} {} {}; DEFAULT = None", col.name, col.decl_type)?;
        }
        writeln!(f)?;
        writeln!(f, ".........Optional Arguments:")?;
        for (idx, col) in self.schema.optional() {
            let default = col.default.as_deref().unwrap_or("None");
            writeln!(f, "{idx} {} {}; DEFAULT = {default}", col.name, col.decl_type)?;
        }
        Ok(())
    }
}
