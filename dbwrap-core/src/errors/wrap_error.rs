//! Table-wrapper errors.

use super::error_code::{self, WrapErrorCode};

/// Errors that can occur while binding, validating, or executing.
///
/// `UnknownColumn`, `EmptyConstraint` and `InvalidIdentifier` are
/// validation failures: the statement was never sent to the store.
#[derive(Debug, thiserror::Error)]
pub enum WrapError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Schema unavailable for table '{table}': {message}")]
    SchemaUnavailable { table: String, message: String },

    #[error("'{name}' is not a valid column name")]
    UnknownColumn { name: String },

    #[error("Constraint on '{name}' has no alternatives")]
    EmptyConstraint { name: String },

    #[error("Invalid SQL identifier: '{name}'")]
    InvalidIdentifier { name: String },

    #[error("Store execution failed: {message}")]
    StoreExecution { message: String },

    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WrapError {
    /// True when the error came from name validation rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::UnknownColumn { .. } | Self::EmptyConstraint { .. } | Self::InvalidIdentifier { .. }
        )
    }

    pub fn store(e: impl std::fmt::Display) -> Self {
        Self::StoreExecution {
            message: e.to_string(),
        }
    }

    pub fn unknown_column(name: &str) -> Self {
        Self::UnknownColumn {
            name: name.to_string(),
        }
    }
}

impl From<rusqlite::Error> for WrapError {
    fn from(e: rusqlite::Error) -> Self {
        Self::store(e)
    }
}

impl WrapErrorCode for WrapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => error_code::CONFIGURATION_ERROR,
            Self::SchemaUnavailable { .. } => error_code::SCHEMA_UNAVAILABLE,
            Self::UnknownColumn { .. } => error_code::UNKNOWN_COLUMN,
            Self::EmptyConstraint { .. } => error_code::EMPTY_CONSTRAINT,
            Self::InvalidIdentifier { .. } => error_code::INVALID_IDENTIFIER,
            Self::StoreExecution { .. } => error_code::STORE_EXECUTION_ERROR,
            Self::ConfigParse(_) => error_code::CONFIG_PARSE_ERROR,
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}

/// Convenience type alias.
pub type WrapResult<T> = Result<T, WrapError>;
