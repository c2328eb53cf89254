//! Decides whether an entry is an acceptable final answer.

use crate::config::settings::SelectionType;
use crate::fs::entry::Entry;
use crate::nav::filter::ExtensionFilter;

/// Returns `true` if `entry` may be submitted as the answer.
///
/// Directories are valid only in [`SelectionType::Folder`] mode. Files are
/// valid only in [`SelectionType::File`] mode, and then only if the filter
/// allows their name.
pub fn check_valid_selection(
    entry: &Entry,
    selection_type: SelectionType,
    filter: &ExtensionFilter,
) -> bool {
    if entry.is_dir() {
        selection_type == SelectionType::Folder
    } else {
        selection_type == SelectionType::File && filter.allows(entry.name())
    }
}
