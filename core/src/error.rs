//! Error types for alias table loading.
//!
//! Parsing itself never fails; only reading alias definitions from files or
//! command-line strings can.

use thiserror::Error;

/// Errors that can occur while building an [`AliasTable`](crate::AliasTable).
#[derive(Debug, Error)]
pub enum AliasError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (or JSON) parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A `short=long` definition was malformed.
    #[error("invalid alias definition: {0}")]
    InvalidDefinition(String),
}

/// Convenience alias for results with [`AliasError`].
pub type Result<T> = std::result::Result<T, AliasError>;
