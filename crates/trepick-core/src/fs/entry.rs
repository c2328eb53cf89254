//! Directory entry representation.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

/// Glyph prefixed to directory names in their display string.
pub const DIR_MARKER: &str = "\u{276f}";

/// A single child of a listed directory.
///
/// `Entry` is immutable: the path, kind and display text are fixed when the
/// directory is listed and never re-checked afterwards. The display string
/// is for rendering only: two distinct names may normalise to the same text.
///
/// # Examples
///
/// ```
/// use trepick_core::Entry;
/// use std::path::PathBuf;
///
/// let dir = Entry::new(PathBuf::from("/root/sub"), true);
/// assert_eq!(dir.display(), "\u{276f} sub");
///
/// let file = Entry::new(PathBuf::from("/root/a.txt"), false);
/// assert_eq!(file.display(), "a.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    path: PathBuf,
    name: String,
    is_dir: bool,
    display: String,
}

impl Entry {
    /// Creates an entry for `path`, classified as a directory when `is_dir` is set.
    ///
    /// The name is taken from the last path component and NFC-normalised so
    /// decomposed filenames (macOS) render as composed text.
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let display = if is_dir {
            format!("{DIR_MARKER} {name}")
        } else {
            name.clone()
        };

        Self {
            path,
            name,
            is_dir,
            display,
        }
    }

    /// Returns the absolute path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if this entry was a directory when listed.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns the text shown to the user for this entry.
    pub fn display(&self) -> &str {
        &self.display
    }
}
