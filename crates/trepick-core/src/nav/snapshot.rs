//! Ordered, unfiltered listing of one directory.

use std::path::Path;

use crate::error::CoreResult;
use crate::fs::entry::Entry;
use crate::fs::ops::read_directory;

/// The entries of one directory with every directory ahead of every file.
///
/// Within each group the listing order is kept as-is; there is no further
/// sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    /// Builds a snapshot by stably partitioning `entries` into directories, then files.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let (mut dirs, files): (Vec<Entry>, Vec<Entry>) =
            entries.into_iter().partition(Entry::is_dir);
        dirs.extend(files);
        Self { entries: dirs }
    }

    /// Lists `path` and builds its snapshot.
    ///
    /// # Errors
    ///
    /// Propagates every error from [`read_directory`].
    pub fn read(path: &Path) -> CoreResult<Self> {
        read_directory(path).map(Self::from_entries)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
