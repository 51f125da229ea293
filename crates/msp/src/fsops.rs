//! Filesystem primitives shared by the assemblers.
//!
//! Copies merge into the destination and overwrite files that already
//! exist there. Modification times are carried over so that newest-artifact
//! selection gives the same answer on the copy as on the staged source.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{MspError, MspResult};

pub(crate) fn ensure_dir(path: &Path) -> MspResult<()> {
    fs::create_dir_all(path).map_err(|e| MspError::io(path, e))
}

pub(crate) fn write_file(path: &Path, contents: &[u8]) -> MspResult<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).map_err(|e| MspError::io(path, e))
}

/// Copy a single file, creating the destination's parent directories.
pub(crate) fn copy_file(src: &Path, dst: &Path) -> MspResult<()> {
    let metadata = fs::metadata(src).map_err(|e| MspError::source_io(src, e))?;
    if let Some(parent) = dst.parent() {
        ensure_dir(parent)?;
    }
    // A read-only file left by an earlier run cannot be opened for writing.
    match fs::remove_file(dst) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(MspError::io(dst, e)),
    }
    fs::copy(src, dst).map_err(|e| MspError::io(dst, e))?;
    if let Ok(modified) = metadata.modified() {
        set_modified(dst, modified)?;
    }
    tracing::debug!("copied {} -> {}", src.display(), dst.display());
    Ok(())
}

/// Recursively copy `src` into `dst`, merging with whatever `dst` holds.
pub(crate) fn copy_tree(src: &Path, dst: &Path) -> MspResult<()> {
    let metadata = fs::metadata(src).map_err(|e| MspError::source_io(src, e))?;
    if !metadata.is_dir() {
        return copy_file(src, dst);
    }

    ensure_dir(dst)?;
    for entry in fs::read_dir(src).map_err(|e| MspError::io(src, e))? {
        let entry = entry.map_err(|e| MspError::io(src, e))?;
        let path = entry.path();
        let target = dst.join(entry.file_name());
        let is_dir = fs::metadata(&path)
            .map_err(|e| MspError::io(&path, e))?
            .is_dir();
        if is_dir {
            copy_tree(&path, &target)?;
        } else {
            copy_file(&path, &target)?;
        }
    }
    Ok(())
}

/// Copy the regular files directly under `src` into `dst`, naming each
/// copy with `rename(file_name)`. Returns the names written, sorted.
pub(crate) fn copy_files_renamed(
    src: &Path,
    dst: &Path,
    rename: impl Fn(&str) -> String,
) -> MspResult<Vec<String>> {
    let entries = fs::read_dir(src).map_err(|e| MspError::source_io(src, e))?;
    ensure_dir(dst)?;

    let mut written = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MspError::io(src, e))?;
        let path = entry.path();
        if !fs::metadata(&path)
            .map_err(|e| MspError::io(&path, e))?
            .is_file()
        {
            continue;
        }
        let file_name = entry.file_name();
        let target = rename(file_name.to_string_lossy().as_ref());
        copy_file(&path, &dst.join(&target))?;
        written.push(target);
    }
    written.sort();
    Ok(written)
}

/// Names of the subdirectories of `dir`, sorted.
///
/// A directory that does not exist yet has no subdirectories.
pub(crate) fn list_subdirs(dir: &Path) -> MspResult<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(MspError::io(dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MspError::io(dir, e))?;
        let path = entry.path();
        let is_dir = fs::metadata(&path)
            .map_err(|e| MspError::io(&path, e))?
            .is_dir();
        match entry.file_name().into_string() {
            Ok(name) if is_dir => names.push(name),
            Ok(name) => tracing::warn!("skipping non-directory entry {} in {}", name, dir.display()),
            Err(name) => tracing::warn!(
                "skipping non UTF-8 entry {:?} in {}",
                name,
                dir.display()
            ),
        }
    }
    names.sort();
    Ok(names)
}

#[cfg(unix)]
fn set_modified(path: &Path, modified: SystemTime) -> MspResult<()> {
    // Explicit timestamps need ownership, not a writable handle.
    let file = fs::File::open(path).map_err(|e| MspError::io(path, e))?;
    file.set_modified(modified)
        .map_err(|e| MspError::io(path, e))
}

#[cfg(not(unix))]
fn set_modified(path: &Path, modified: SystemTime) -> MspResult<()> {
    let file = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| MspError::io(path, e))?;
    file.set_modified(modified)
        .map_err(|e| MspError::io(path, e))
}
