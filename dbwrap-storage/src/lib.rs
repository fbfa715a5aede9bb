//! # dbwrap-storage
//!
//! SQLite backend for the dbwrap table wrapper.
//! Schema introspection and caching, schema-validated insert/select
//! building with positional binding, and batch inserts that skip rows
//! naming unknown columns.

pub mod batch;
pub mod connection;
pub mod engine;
pub mod exec;
pub mod query;
pub mod schema_cache;

pub use batch::insert_all;
pub use engine::TableWrapper;
pub use query::{build_insert, build_select, QueryBuilder};
pub use schema_cache::{load_schema, SchemaCache};
