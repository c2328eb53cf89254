//! Directory reading.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::Entry;

/// Reads the immediate children of a directory and returns them as [`Entry`] values.
///
/// Children are classified without following symlinks, so a link to a
/// directory is listed as a file. Entries come back in byte order of their
/// names, which is the listing order the rest of the crate treats as given;
/// use [`crate::nav::snapshot::Snapshot::from_entries`] to group directories first.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error, including failures on a single child.
///
/// # Examples
///
/// ```no_run
/// use trepick_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.display());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<Vec<Entry>> {
    let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(path, e))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(path, e))?;

    let mut children = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| CoreError::from_io(path, e))?;
        let child = dir_entry.path();
        let file_type = dir_entry
            .file_type()
            .map_err(|e| CoreError::from_io(&child, e))?;
        children.push((dir_entry.file_name(), child, file_type.is_dir()));
    }
    children.sort_by(|a, b| a.0.cmp(&b.0));

    let entries: Vec<Entry> = children
        .into_iter()
        .map(|(_, child, is_dir)| Entry::new(child, is_dir))
        .collect();

    tracing::debug!(dir = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}
