//! Extension allow-list and the visible-list filter.

use crate::fs::entry::Entry;
use crate::nav::snapshot::Snapshot;

/// A set of filename suffixes considered acceptable.
///
/// Matching is a literal, case-sensitive suffix test on the name: `txt`
/// matches both `file.txt` and `mytxt`. An empty allow-list allows every file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffixes: Vec<String>,
}

impl ExtensionFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffixes: suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when no suffix restriction is configured.
    pub fn allows_all(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Returns `true` if `name` ends with one of the suffixes.
    ///
    /// Always `false` for an empty allow-list; see [`Self::allows`].
    pub fn matches(&self, name: &str) -> bool {
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    /// Returns `true` if `name` is acceptable: the allow-list is empty or it matches.
    pub fn allows(&self, name: &str) -> bool {
        self.allows_all() || self.matches(name)
    }

    /// Returns `true` if the entry is shown undimmed: directories and allowed files.
    pub fn is_eligible(&self, entry: &Entry) -> bool {
        entry.is_dir() || self.allows(entry.name())
    }
}

/// Returns the snapshot positions of the entries the cursor ranges over.
///
/// With `only_show_matching` unset every entry is visible in snapshot order.
/// Otherwise directories are always kept and files are kept only if their
/// name ends with one of the filter's suffixes.
pub fn visible_indices(
    snapshot: &Snapshot,
    filter: &ExtensionFilter,
    only_show_matching: bool,
) -> Vec<usize> {
    snapshot
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, e)| !only_show_matching || e.is_dir() || filter.matches(e.name()))
        .map(|(i, _)| i)
        .collect()
}

/// Derives the display strings shown to the user from a snapshot.
///
/// Display strings are not guaranteed unique (`é` composed and decomposed
/// normalise to the same text), so callers that need the entry behind a row
/// should use [`visible_indices`].
pub fn visible_list(
    snapshot: &Snapshot,
    filter: &ExtensionFilter,
    only_show_matching: bool,
) -> Vec<String> {
    let entries = snapshot.entries();
    visible_indices(snapshot, filter, only_show_matching)
        .into_iter()
        .map(|i| entries[i].display().to_owned())
        .collect()
}
