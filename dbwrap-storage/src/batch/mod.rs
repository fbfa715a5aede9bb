//! Batch inserts with per-item validation isolation.

mod executor;

pub use executor::insert_all;
