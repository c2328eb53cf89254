//! Bounded window over a long listing.
//!
//! The paginator is non-infinite: the window never wraps around the ends of
//! the list. It keeps the active row roughly centred and pins the window to
//! the top or bottom edge when the active row is near either end.

/// Returns at most `page_size` consecutive `lines` with `lines[active]` among them.
pub fn paginate<T>(lines: &[T], active: usize, page_size: usize) -> &[T] {
    let last_start = lines.len().saturating_sub(page_size);
    let start = active.saturating_sub(page_size / 2).min(last_start);
    let end = lines.len().min(start + page_size);
    &lines[start..end]
}

/// Returns `true` if the listing does not fit on one page.
pub fn is_paged(total: usize, page_size: usize) -> bool {
    total > page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn short_list_is_shown_whole() {
        let lines = rows(3);
        assert_eq!(paginate(&lines, 0, 10), &[0usize, 1, 2]);
        assert_eq!(paginate(&lines, 2, 10), &[0usize, 1, 2]);
        assert!(paginate(&rows(0), 0, 10).is_empty());
    }

    #[test]
    fn window_is_pinned_to_top() {
        let lines = rows(20);
        assert_eq!(paginate(&lines, 0, 4), &[0usize, 1, 2, 3]);
        assert_eq!(paginate(&lines, 2, 4), &[0usize, 1, 2, 3]);
    }

    #[test]
    fn window_centres_active_row() {
        let lines = rows(20);
        assert_eq!(paginate(&lines, 10, 4), &[8usize, 9, 10, 11]);
        assert_eq!(paginate(&lines, 10, 5), &[8usize, 9, 10, 11, 12]);
    }

    #[test]
    fn window_is_pinned_to_bottom() {
        let lines = rows(20);
        assert_eq!(paginate(&lines, 19, 4), &[16usize, 17, 18, 19]);
        assert_eq!(paginate(&lines, 18, 4), &[16usize, 17, 18, 19]);
    }

    #[test]
    fn active_row_always_in_window() {
        for total in 0..30 {
            let lines = rows(total);
            for page in 1..12 {
                for active in 0..total {
                    let window = paginate(&lines, active, page);
                    assert!(window.contains(&active), "{active} {total} {page}");
                    assert_eq!(window.len(), total.min(page));
                }
            }
        }
    }

    #[test]
    fn paged_only_when_overflowing() {
        assert!(!is_paged(10, 10));
        assert!(is_paged(11, 10));
    }
}
