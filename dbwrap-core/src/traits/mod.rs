//! Trait seam between callers and the table backend.

pub mod table_store;

pub use table_store::ITableStore;
