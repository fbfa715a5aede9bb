//! Stable string codes for errors crossing an API boundary.

/// Errors that expose a stable, machine-readable code.
pub trait WrapErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const SCHEMA_UNAVAILABLE: &str = "SCHEMA_UNAVAILABLE";
pub const UNKNOWN_COLUMN: &str = "UNKNOWN_COLUMN";
pub const EMPTY_CONSTRAINT: &str = "EMPTY_CONSTRAINT";
pub const INVALID_IDENTIFIER: &str = "INVALID_IDENTIFIER";
pub const STORE_EXECUTION_ERROR: &str = "STORE_EXECUTION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
