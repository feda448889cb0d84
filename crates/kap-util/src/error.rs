//! Core error types for the kap-util crate.

use std::path::Path;

use thiserror::Error;

/// Errors raised while loading or indexing a source file.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying file could not be opened or read.
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A byte offset or line number fell outside the file's bounds.
    #[error("{path}: line {line} out of range (file has {max_lines} lines)")]
    LineOutOfRange {
        path: String,
        line: usize,
        max_lines: usize,
    },
}

impl SourceError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SourceError::Io {
            path: path.as_ref().to_string_lossy().into_owned(),
            source,
        }
    }
}

/// Error type for index vector operations
#[derive(Debug, Error)]
pub enum IndexVecError {
    /// Index out of bounds
    #[error("Index out of bounds: index {index}, length {length}")]
    OutOfBounds { index: usize, length: usize },

    /// Invalid index
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
}

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Failed to format diagnostic
    #[error("Failed to format diagnostic: {0}")]
    FormatFailed(String),

    /// Invalid diagnostic code
    #[error("Invalid diagnostic code: {0}")]
    InvalidCode(String),
}

/// Result type alias for source operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;

/// Result type alias for index vector operations
pub type IndexVecResult<T> = std::result::Result<T, IndexVecError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
