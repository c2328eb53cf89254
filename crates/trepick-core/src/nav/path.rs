//! Path helpers for navigation.
//!
//! Paths are handled lexically: symlinks are never resolved, so a session
//! started in `link/` keeps answering with `link/...` paths and `Ascend`
//! climbs to the parent the user came through.

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// Returns the parent of `dir`, or `dir` itself when it is a filesystem root.
///
/// Works on path components, so trailing separators and platform separators
/// are handled by [`Path::parent`].
pub fn parent_of(dir: &Path) -> PathBuf {
    dir.parent().unwrap_or(dir).to_path_buf()
}

/// Resolves `path` against `base` into an absolute path with `.` and `..`
/// removed.
///
/// Nothing is checked on disk; listing the result reports a missing or
/// non-directory target.
///
/// # Errors
///
/// Only if `base` is relative and the working directory cannot be read.
pub fn resolve_dir(base: &Path, path: &Path) -> CoreResult<PathBuf> {
    let joined = base.join(path);
    let absolute = std::path::absolute(&joined).map_err(|e| CoreError::from_io(&joined, e))?;
    Ok(normalize(&absolute))
}

/// Drops `.` components and lets `..` remove the preceding one. A `..` at
/// the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
