//! Error types for membership materialization.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while assembling membership directories.
#[derive(Debug, Error)]
pub enum MspError {
    /// A source tree the assembler reads from does not exist yet,
    /// usually because the CA issuance step has not run.
    #[error("Missing prerequisite: {} does not exist", .path.display())]
    MissingPrerequisite { path: PathBuf },

    /// Newest-artifact selection ran over a directory with no files.
    #[error("No artifact found in {}", .dir.display())]
    NoArtifact { dir: PathBuf },

    /// Any other filesystem failure.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MspError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        MspError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Like [`MspError::io`], but a missing path becomes `MissingPrerequisite`.
    pub(crate) fn source_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            MspError::MissingPrerequisite {
                path: path.to_path_buf(),
            }
        } else {
            MspError::io(path, source)
        }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            MspError::MissingPrerequisite { path } => path,
            MspError::NoArtifact { dir } => dir,
            MspError::Io { path, .. } => path,
        }
    }
}

/// Result type for materialization operations.
pub type MspResult<T> = Result<T, MspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_becomes_missing_prerequisite() {
        let err = MspError::source_io(
            Path::new("/tmp/ca/Admin@org1/msp"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, MspError::MissingPrerequisite { .. }));
        assert_eq!(
            err.to_string(),
            "Missing prerequisite: /tmp/ca/Admin@org1/msp does not exist"
        );
    }

    #[test]
    fn test_other_errors_stay_io() {
        let err = MspError::source_io(
            Path::new("/tmp/x"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, MspError::Io { .. }));
        assert_eq!(err.path(), Path::new("/tmp/x"));
    }
}
