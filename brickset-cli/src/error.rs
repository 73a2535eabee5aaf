use brickset_catalog::{LoadError, QueryError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// The catalog could not be read or parsed
    #[error("Failed to load catalog: {0}")]
    Load(#[from] LoadError),

    /// A query came up empty where a result was required
    #[error("{0}")]
    Query(#[from] QueryError),

    /// A lookup by identifier matched nothing
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
