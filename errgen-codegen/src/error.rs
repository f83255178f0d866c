//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Specification parse error.
    #[error("specification parse error: {0}")]
    Parse(#[from] errgen_schema::ParseError),

    /// Specification validation error.
    #[error("specification error: {0}")]
    Schema(#[from] errgen_schema::SchemaError),

    /// The specification file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        /// Input path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// An output target could not be created or written.
    #[error("cannot write '{}': {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Invalid generator or output configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a write error for the given path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
