//! Error types for artifact access.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading or writing network artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The shared `.env` has not been created yet
    #[error("Missing process: run `bdk config init` first ({} not found)", .path.display())]
    MissingEnv { path: PathBuf },

    /// No package id has been saved for the chaincode label
    #[error("Missing package id for chaincode '{label}': install the chaincode or query its package id first")]
    MissingPackageId { label: String },

    /// Filesystem failure
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ArtifactError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for artifact operations.
pub type ArtifactResult<T> = Result<T, ArtifactError>;
