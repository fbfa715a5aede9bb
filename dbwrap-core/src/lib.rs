//! # dbwrap-core
//!
//! Foundation crate for the dbwrap table wrapper.
//! Defines the value, schema, assignment and statement types, the
//! `ITableStore` trait, errors, config, and tracing setup.
//! `dbwrap-storage` depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{TableBinding, WrapConfig};
pub use errors::error_code::WrapErrorCode;
pub use errors::{WrapError, WrapResult};
pub use traits::ITableStore;
pub use types::assignment::FieldAssignment;
pub use types::constraint::{Alternatives, Constraints};
pub use types::schema::{ColumnInfo, ColumnReport, TableSchema};
pub use types::statement::{BatchResult, Statement};
pub use types::value::Value;
