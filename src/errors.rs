//! Typed error definitions for photo_tool.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotoToolError {
    #[error("No source path given; pass --path, set PHOTO_TOOL_PATH or add <path> to the config file")]
    MissingSource,

    #[error("Source path not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not accessible: {path}: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Insufficient disk space for destination {dest}: need {required} bytes, have {available} bytes")]
    InsufficientSpace {
        required: u64,
        available: u64,
        dest: PathBuf,
    },

    #[error("Invalid value for {var}: '{value}'")]
    InvalidEnv { var: &'static str, value: String },
}

impl PhotoToolError {
    /// Stable short code used in structured log fields.
    pub fn code(&self) -> &'static str {
        match self {
            PhotoToolError::MissingSource => "missing_source",
            PhotoToolError::SourceNotFound(_) => "source_not_found",
            PhotoToolError::SourceUnreadable { .. } => "source_unreadable",
            PhotoToolError::DestinationExists(_) => "destination_exists",
            PhotoToolError::InsufficientSpace { .. } => "insufficient_space",
            PhotoToolError::InvalidEnv { .. } => "invalid_env",
        }
    }
}
