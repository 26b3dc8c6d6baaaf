//! Error types for the RPCID tool

use rpcid_core::{ErrorCategory, RpcidError};
use std::path::PathBuf;

/// Errors reported by the file-level operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is {size} bytes, limit is {limit}", .path.display())]
    InputTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("{} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("get \"{0}\" failed: field not found")]
    MissingField(String),

    #[error("get \"{field}\" failed: expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("{0}")]
    Format(RpcidError),

    #[error("{0}")]
    Encoding(RpcidError),
}

impl ToolError {
    /// Wrap an I/O error with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ToolError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this is a malformed-JSON or missing-field failure
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            ToolError::Json(_) | ToolError::MissingField(_) | ToolError::WrongType { .. }
        )
    }

    /// Whether this is a file system failure
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ToolError::Io { .. }
                | ToolError::InputTooLarge { .. }
                | ToolError::NotAFile(_)
                | ToolError::NotADirectory(_)
        )
    }
}

impl From<RpcidError> for ToolError {
    fn from(err: RpcidError) -> Self {
        match err.category() {
            ErrorCategory::Format => ToolError::Format(err),
            ErrorCategory::Encoding => ToolError::Encoding(err),
        }
    }
}

/// Result type for tool operations
pub type Result<T> = std::result::Result<T, ToolError>;
