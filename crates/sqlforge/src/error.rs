//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for build operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement building.
///
/// Building is deterministic, so there is nothing transient here: either a
/// complete, well-formed fragment is returned or one of these is raised and
/// no text is emitted for that fragment.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A builder was driven in a way that would render malformed SQL
    /// (wrong operand arity, `IN ()` with no values, USING columns without
    /// the enclosing query table). Raised at render time.
    #[error("invalid usage: {0}")]
    Usage(String),

    /// Invalid configuration (unknown dialect name, unrecognized join
    /// type). Raised at construction/configuration time.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl SqlError {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this is a usage error
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_))
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
