//! Viewport window calculation.
//!
//! The body area shows a contiguous run of rows centred on the cursor. Near
//! the top of the list the window is pushed down so it stays full; near the
//! bottom it is not pushed up, so it shrinks as the cursor approaches the
//! last record.

use std::ops::Range;

/// Rows reserved for the header (2), legend (1) and margin (2).
pub const CHROME_ROWS: i32 = 5;

/// Body rows available on a terminal `height` rows tall. Can be zero or
/// negative on tiny terminals.
pub fn available_rows(height: u16) -> i32 {
    i32::from(height) - CHROME_ROWS
}

/// Inclusive range of record indices currently on screen.
///
/// # Invariants
/// - `start <= end`
/// - `end < len` of the record list it was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleWindow {
    bounds: Option<(usize, usize)>,
}

impl VisibleWindow {
    /// Window showing no rows.
    pub const fn empty() -> Self {
        Self { bounds: None }
    }

    /// Window over `start..=end`.
    ///
    /// # Panics
    /// In debug builds, panics if `start > end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "window start {start} past end {end}");
        Self {
            bounds: Some((start, end)),
        }
    }

    /// First visible index.
    pub fn start(&self) -> Option<usize> {
        self.bounds.map(|(start, _)| start)
    }

    /// Last visible index (inclusive).
    pub fn end(&self) -> Option<usize> {
        self.bounds.map(|(_, end)| end)
    }

    /// Number of visible rows.
    pub fn len(&self) -> usize {
        self.bounds.map_or(0, |(start, end)| end - start + 1)
    }

    /// Whether no rows are visible.
    pub fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Visible indices as a half-open range.
    pub fn indices(&self) -> Range<usize> {
        self.bounds.map_or(0..0, |(start, end)| start..end + 1)
    }

    /// Whether `index` is on screen.
    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// Compute the visible window for `cursor` over `len` records with
/// `available_rows` body rows.
///
/// ```text
/// half  = rows / 2
/// start = max(0, cursor - half)
/// slack = start - (cursor - half)        // > 0 only when clamped at the top
/// end   = min(len - 1, cursor + half + slack)
/// ```
///
/// Empty when there are no records or no rows.
pub fn visible_window(cursor: usize, len: usize, available_rows: i32) -> VisibleWindow {
    if len == 0 || available_rows <= 0 {
        return VisibleWindow::empty();
    }

    let last = len as i64 - 1;
    let cursor = (cursor as i64).min(last);
    let half = i64::from(available_rows) / 2;

    let start = (cursor - half).max(0);
    let slack = start - (cursor - half);
    let end = (cursor + half + slack).min(last);

    VisibleWindow::new(start as usize, end as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn new_creates_inclusive_window() {
            let window = VisibleWindow::new(5, 10);
            assert_eq!(window.start(), Some(5));
            assert_eq!(window.end(), Some(10));
            assert_eq!(window.len(), 6);
            assert_eq!(window.indices(), 5..11);
        }

        #[test]
        fn new_accepts_single_row() {
            let window = VisibleWindow::new(5, 5);
            assert_eq!(window.len(), 1);
            assert!(window.contains(5));
        }

        #[test]
        #[should_panic]
        #[cfg(debug_assertions)]
        fn new_panics_when_start_greater_than_end() {
            VisibleWindow::new(10, 5);
        }

        #[test]
        fn default_is_empty() {
            let window = VisibleWindow::default();
            assert!(window.is_empty());
            assert_eq!(window.len(), 0);
            assert_eq!(window.indices(), 0..0);
            assert!(!window.contains(0));
        }
    }

    mod windowing {
        use super::*;

        #[test]
        fn window_centres_on_cursor_mid_list() {
            let window = visible_window(10, 1000, 15);
            assert_eq!(window, VisibleWindow::new(3, 17));
            assert_eq!(window.len(), 15);
        }

        #[test]
        fn top_clamp_extends_window_downwards() {
            let window = visible_window(2, 1000, 15);
            assert_eq!(window, VisibleWindow::new(0, 14));
            assert_eq!(window.len(), 15);
        }

        #[test]
        fn bottom_clamp_shrinks_window() {
            let window = visible_window(998, 1000, 15);
            assert_eq!(window, VisibleWindow::new(991, 999));
            assert_eq!(window.len(), 9);
        }

        #[test]
        fn even_row_count_shows_one_extra_row() {
            let window = visible_window(50, 1000, 16);
            assert_eq!(window, VisibleWindow::new(42, 58));
            assert_eq!(window.len(), 17);
        }

        #[test]
        fn short_list_fits_entirely() {
            assert_eq!(visible_window(1, 3, 15), VisibleWindow::new(0, 2));
        }

        #[test]
        fn empty_list_shows_nothing() {
            assert!(visible_window(0, 0, 15).is_empty());
        }

        #[test]
        fn degenerate_geometry_shows_nothing() {
            assert!(visible_window(3, 10, 0).is_empty());
            assert!(visible_window(3, 10, -4).is_empty());
        }

        #[test]
        fn single_row_shows_cursor_only() {
            assert_eq!(visible_window(7, 10, 1), VisibleWindow::new(7, 7));
        }

        #[test]
        fn cursor_past_end_is_clamped() {
            assert_eq!(visible_window(50, 10, 15), VisibleWindow::new(2, 9));
        }
    }

    #[test]
    fn available_rows_subtracts_chrome() {
        assert_eq!(available_rows(20), 15);
        assert_eq!(available_rows(5), 0);
        assert_eq!(available_rows(2), -3);
    }
}
