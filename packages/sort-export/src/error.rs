//! Error types for sort-export.
//!
//! Parsing failures (`MalformedInput`) come from the line-group parser itself;
//! everything that touches the filesystem is attributed to the file involved.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for the sort-export library.
#[derive(Debug, Error)]
pub enum SortExportError {
    /// The line sequence violates the block structure.
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A text export on disk violates the block structure.
    #[error("Malformed input in {}, line {line}: {reason}", .path.display())]
    MalformedFile {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A sorted JSON document could not be loaded.
    #[error("Cannot read sorted document {}: {reason}", .path.display())]
    SourceRead { path: PathBuf, reason: String },

    /// A path given on the command line is unusable.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl SortExportError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    pub(crate) fn source_read(path: &Path, reason: impl ToString) -> Self {
        Self::SourceRead {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Attach a file path to a parser error. Other variants pass through.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            Self::MalformedInput { line, reason } => Self::MalformedFile {
                path: path.to_path_buf(),
                line,
                reason,
            },
            other => other,
        }
    }

    /// Line number of a parse failure, if this is one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedInput { line, .. } | Self::MalformedFile { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type alias for sort-export operations.
pub type Result<T> = std::result::Result<T, SortExportError>;
