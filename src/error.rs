//! Error types for the image forest and its boundaries.

use crate::types::ImageId;
use thiserror::Error;

/// Errors raised while building or querying a forest.
#[derive(Debug, Error)]
pub enum ForestError {
    #[error("Image not found: {0}")]
    NotFound(ImageId),

    #[error("Image {child} references missing parent {parent}")]
    DanglingReference { child: ImageId, parent: ImageId },

    #[error("Unrecognized timestamp format: {0:?}")]
    UnrecognizedTimestamp(String),
}

/// Errors raised by record sources (docker CLI, snapshot files).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{context}:\n  {stderr}")]
    CommandFailed { context: String, stderr: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image metadata: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No such image: {0}")]
    UnknownImage(String),
}

/// Top-level error reported by the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Forest(#[from] ForestError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("{0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
