//! Configuration for a table binding.

pub mod wrap_config;

pub use wrap_config::{TableBinding, WrapConfig};
