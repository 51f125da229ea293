//! Newest-artifact selection.
//!
//! A CA re-issuance may leave stale artifacts next to fresh ones. The
//! canonical artifact of a directory is the regular file with the latest
//! modification time; equal times resolve to the smallest file name.

use std::cmp::Ordering;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{MspError, MspResult};

/// A file considered by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: OsString,
    pub modified: SystemTime,
}

impl Candidate {
    pub fn new(name: impl Into<OsString>, modified: SystemTime) -> Self {
        Self {
            name: name.into(),
            modified,
        }
    }

    fn recency(&self, other: &Self) -> Ordering {
        self.modified
            .cmp(&other.modified)
            .then_with(|| other.name.cmp(&self.name))
    }
}

/// Pick the newest candidate. Returns `None` only for an empty slice.
pub fn pick_newest(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().max_by(|a, b| a.recency(b))
}

/// List the regular files of `dir` as selection candidates.
pub fn candidates_in(dir: &Path) -> MspResult<Vec<Candidate>> {
    let entries = fs::read_dir(dir).map_err(|e| MspError::source_io(dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MspError::io(dir, e))?;
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| MspError::io(&path, e))?;
        if !metadata.is_file() {
            continue;
        }
        let modified = metadata.modified().map_err(|e| MspError::io(&path, e))?;
        candidates.push(Candidate::new(entry.file_name(), modified));
    }
    Ok(candidates)
}

/// Full path of the newest artifact in `dir`.
///
/// # Errors
///
/// - `MissingPrerequisite` if `dir` does not exist
/// - `NoArtifact` if `dir` holds no regular file
pub fn newest_artifact(dir: &Path) -> MspResult<PathBuf> {
    let candidates = candidates_in(dir)?;
    let newest = pick_newest(&candidates).ok_or_else(|| MspError::NoArtifact {
        dir: dir.to_path_buf(),
    })?;

    tracing::debug!(
        "selected {:?} as newest of {} candidate(s) in {}",
        newest.name,
        candidates.len(),
        dir.display()
    );
    Ok(dir.join(&newest.name))
}
