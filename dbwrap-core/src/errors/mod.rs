//! Error types for every dbwrap operation.

pub mod error_code;
mod wrap_error;

pub use wrap_error::{WrapError, WrapResult};
