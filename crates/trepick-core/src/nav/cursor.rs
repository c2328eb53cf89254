//! Clamped cursor movement over the visible list.

/// Computes the cursor index after moving `distance` rows from `current`.
///
/// The result is clamped to `0..len`, so moving past either end stops at the
/// boundary rather than wrapping. Returns `None` when the list is empty.
pub fn move_selected(current: usize, distance: isize, len: usize) -> Option<usize> {
    let last = len.checked_sub(1)?;
    let current = current.min(last) as isize;
    let target = current.saturating_add(distance).clamp(0, last as isize);
    Some(target as usize)
}
