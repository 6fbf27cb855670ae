//! # Pagination
//!
//! Decides which page markers a catalog paginator renders.
//!
//! ## Window Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Page Window (total_pages = 20)                      │
//! │                                                                         │
//! │  total ≤ 7           1 2 3 4 5 6 7            (every page, no ellipsis) │
//! │                                                                         │
//! │  current ≤ 3         1 2 3 4 … 20                                       │
//! │                                                                         │
//! │  middle (10)         1 … 9 10 11 … 20                                   │
//! │                                                                         │
//! │  current ≥ total-2   1 … 17 18 19 20                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Preconditions
//! `compute_window` clamps `current_page` into `[1, max(total_pages, 1)]`, so
//! it is total over every input. Navigation ([`Paginator::go_to`],
//! [`Paginator::previous`], [`Paginator::next`]) does NOT clamp: an
//! out-of-range request is rejected with a [`CoreError`].
//!
//! Whether a paginator is rendered at all is the caller's decision; see
//! [`Paginator::should_render`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, NavDirection};
use crate::validation::validate_page;
use crate::{EDGE_SPAN, FULL_WINDOW_MAX_PAGES};

// =============================================================================
// Page Marker
// =============================================================================

/// One slot in a rendered paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "camelCase")]
#[ts(export)]
pub enum PageMarker {
    /// A concrete, 1-indexed page that can be activated.
    Page { number: u32 },
    /// A gap placeholder; not clickable.
    Ellipsis,
}

impl PageMarker {
    /// Shorthand for `PageMarker::Page { number }`.
    #[inline]
    pub const fn page(number: u32) -> Self {
        PageMarker::Page { number }
    }

    /// Returns the page number, or `None` for an ellipsis.
    #[inline]
    pub const fn number(&self) -> Option<u32> {
        match self {
            PageMarker::Page { number } => Some(*number),
            PageMarker::Ellipsis => None,
        }
    }

    #[inline]
    pub const fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

impl std::fmt::Display for PageMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageMarker::Page { number } => write!(f, "{}", number),
            PageMarker::Ellipsis => write!(f, "…"),
        }
    }
}

// =============================================================================
// Page Window
// =============================================================================

/// Ordered sequence of markers for one `(current_page, total_pages)` query.
///
/// ## Invariant
/// When `total_pages ≥ 1`, the first marker is page `1` and the last marker is
/// page `total_pages`. Recomputed on every query, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PageWindow {
    /// Page the window was computed for, after clamping.
    pub current_page: u32,
    pub total_pages: u32,
    pub markers: Vec<PageMarker>,
}

impl PageWindow {
    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns true if the window contains any ellipsis marker.
    pub fn has_ellipsis(&self) -> bool {
        self.markers.iter().any(PageMarker::is_ellipsis)
    }

    /// Iterates over the concrete page numbers, skipping ellipses.
    pub fn pages(&self) -> impl Iterator<Item = u32> + '_ {
        self.markers.iter().filter_map(PageMarker::number)
    }
}

impl std::fmt::Display for PageWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, marker) in self.markers.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", marker)?;
        }
        Ok(())
    }
}

/// Computes the paginator window for a 1-indexed page.
///
/// ## Rules
/// - `total_pages ≤ 7`: every page `1..=total_pages`, no ellipsis
/// - `current_page ≤ 3`: `[1, 2, 3, 4, …, total]`
/// - `current_page ≥ total - 2`: `[1, …, total-3, total-2, total-1, total]`
/// - otherwise: `[1, …, current-1, current, current+1, …, total]`
///
/// `current_page` is clamped into `[1, max(total_pages, 1)]` first.
///
/// ## Example
/// ```rust
/// use atelier_core::pagination::compute_window;
///
/// assert_eq!(compute_window(1, 20).to_string(), "1 2 3 4 … 20");
/// assert_eq!(compute_window(19, 20).to_string(), "1 … 17 18 19 20");
/// assert_eq!(compute_window(2, 5).to_string(), "1 2 3 4 5");
/// ```
pub fn compute_window(current_page: u32, total_pages: u32) -> PageWindow {
    let current = current_page.clamp(1, total_pages.max(1));

    let markers = if total_pages <= FULL_WINDOW_MAX_PAGES {
        (1..=total_pages).map(PageMarker::page).collect()
    } else if current <= EDGE_SPAN {
        let mut markers: Vec<PageMarker> = (1..=EDGE_SPAN + 1).map(PageMarker::page).collect();
        markers.push(PageMarker::Ellipsis);
        markers.push(PageMarker::page(total_pages));
        markers
    } else if current >= total_pages - (EDGE_SPAN - 1) {
        let mut markers = vec![PageMarker::page(1), PageMarker::Ellipsis];
        markers.extend((total_pages - EDGE_SPAN..=total_pages).map(PageMarker::page));
        markers
    } else {
        vec![
            PageMarker::page(1),
            PageMarker::Ellipsis,
            PageMarker::page(current - 1),
            PageMarker::page(current),
            PageMarker::page(current + 1),
            PageMarker::Ellipsis,
            PageMarker::page(total_pages),
        ]
    };

    PageWindow {
        current_page: current,
        total_pages,
        markers,
    }
}

// =============================================================================
// Paginator
// =============================================================================

/// Navigation state of a paginator: where we are and where we may go.
///
/// ## Navigation Contract
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │   [‹ Prev]   1 … 9 [10] 11 … 20   [Next ›]                             │
/// │      │                │               │                                 │
/// │      │                │               └── next(): disabled on page 20   │
/// │      │                └── go_to(n): n must be in 1..=20                 │
/// │      └── previous(): disabled on page 1                                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Moves return the target page; the paginator itself is only updated by
/// [`Paginator::set_current`] once the caller commits the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    current_page: u32,
    total_pages: u32,
}

impl Paginator {
    /// Creates a paginator. `current_page` is clamped like [`compute_window`].
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Paginator {
            current_page: current_page.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    #[inline]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    #[inline]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// A paginator with zero or one page is suppressed entirely.
    #[inline]
    pub const fn should_render(&self) -> bool {
        self.total_pages > 1
    }

    /// Returns the marker window for the current page.
    pub fn window(&self) -> PageWindow {
        compute_window(self.current_page, self.total_pages)
    }

    /// Whether the "previous" control is enabled.
    #[inline]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether the "next" control is enabled.
    #[inline]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns the previous page, or an error on page 1.
    pub fn previous(&self) -> CoreResult<u32> {
        if !self.has_previous() {
            return Err(self.unavailable(NavDirection::Previous));
        }
        Ok(self.current_page - 1)
    }

    /// Returns the next page, or an error on the last page.
    pub fn next(&self) -> CoreResult<u32> {
        if !self.has_next() {
            return Err(self.unavailable(NavDirection::Next));
        }
        Ok(self.current_page + 1)
    }

    /// Validates a direct jump to `page`.
    pub fn go_to(&self, page: u32) -> CoreResult<u32> {
        validate_page(page, self.total_pages).map_err(|_| CoreError::PageOutOfRange {
            requested: page,
            total_pages: self.total_pages,
        })?;
        Ok(page)
    }

    /// Commits a page change previously returned by a navigation method.
    pub fn set_current(&mut self, page: u32) -> CoreResult<()> {
        self.current_page = self.go_to(page)?;
        Ok(())
    }

    /// Updates the page count (e.g., after a filter change), re-clamping the
    /// current page.
    pub fn set_total(&mut self, total_pages: u32) {
        self.total_pages = total_pages;
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    fn unavailable(&self, direction: NavDirection) -> CoreError {
        CoreError::NavigationUnavailable {
            direction,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Paginator::new(1, 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::Ellipsis;

    fn p(n: u32) -> PageMarker {
        PageMarker::page(n)
    }

    #[test]
    fn test_small_ranges_shown_in_full() {
        for total in 0..=7 {
            for current in 1..=total.max(1) {
                let window = compute_window(current, total);
                let expected: Vec<PageMarker> = (1..=total).map(p).collect();
                assert_eq!(window.markers(), expected.as_slice(), "total={total} current={current}");
                assert!(!window.has_ellipsis());
            }
        }
    }

    #[test]
    fn test_zero_pages_yields_empty_window() {
        let window = compute_window(1, 0);
        assert!(window.is_empty());
        assert_eq!(window.current_page, 1);
    }

    #[test]
    fn test_near_start() {
        for total in [8, 9, 20, 1000] {
            for current in 1..=3 {
                assert_eq!(
                    compute_window(current, total).markers(),
                    &[p(1), p(2), p(3), p(4), Ellipsis, p(total)]
                );
            }
        }
    }

    #[test]
    fn test_near_end() {
        for total in [8, 9, 20, 1000] {
            for current in total - 2..=total {
                assert_eq!(
                    compute_window(current, total).markers(),
                    &[p(1), Ellipsis, p(total - 3), p(total - 2), p(total - 1), p(total)]
                );
            }
        }
    }

    #[test]
    fn test_middle() {
        for total in [9, 20, 100] {
            for current in 4..=total - 3 {
                assert_eq!(
                    compute_window(current, total).markers(),
                    &[
                        p(1),
                        Ellipsis,
                        p(current - 1),
                        p(current),
                        p(current + 1),
                        Ellipsis,
                        p(total)
                    ]
                );
            }
        }
    }

    #[test]
    fn test_concrete_middle_case() {
        let window = compute_window(10, 20);
        assert_eq!(window.to_string(), "1 … 9 10 11 … 20");
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 9, 10, 11, 20]);
    }

    #[test]
    fn test_eight_pages_middle_is_two_wide() {
        // Smallest total with a middle band: pages 4 and 5.
        assert_eq!(compute_window(4, 8).to_string(), "1 … 3 4 5 … 8");
        assert_eq!(compute_window(5, 8).to_string(), "1 … 4 5 6 … 8");
        assert_eq!(compute_window(6, 8).to_string(), "1 … 5 6 7 8");
    }

    #[test]
    fn test_boundary_pages_always_present() {
        for total in 1..=40 {
            for current in 1..=total {
                let window = compute_window(current, total);
                assert_eq!(window.markers().first(), Some(&p(1)));
                assert_eq!(window.markers().last(), Some(&p(total)));
            }
        }
    }

    #[test]
    fn test_out_of_range_current_is_clamped() {
        assert_eq!(compute_window(0, 20), compute_window(1, 20));
        assert_eq!(compute_window(99, 20), compute_window(20, 20));
        assert_eq!(compute_window(99, 20).current_page, 20);
    }

    #[test]
    fn test_marker_serialization() {
        assert_eq!(
            serde_json::to_string(&p(3)).unwrap(),
            r#"{"kind":"page","number":3}"#
        );
        assert_eq!(
            serde_json::to_string(&Ellipsis).unwrap(),
            r#"{"kind":"ellipsis"}"#
        );
    }

    #[test]
    fn test_paginator_boundaries() {
        let first = Paginator::new(1, 20);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert!(matches!(
            first.previous(),
            Err(CoreError::NavigationUnavailable {
                direction: NavDirection::Previous,
                ..
            })
        ));
        assert_eq!(first.next().unwrap(), 2);

        let last = Paginator::new(20, 20);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.previous().unwrap(), 19);
        assert!(last.next().is_err());
    }

    #[test]
    fn test_paginator_go_to() {
        let mut pager = Paginator::new(1, 20);
        assert_eq!(pager.go_to(20).unwrap(), 20);
        assert!(matches!(
            pager.go_to(21),
            Err(CoreError::PageOutOfRange {
                requested: 21,
                total_pages: 20
            })
        ));
        assert!(pager.go_to(0).is_err());

        pager.set_current(10).unwrap();
        assert_eq!(pager.current_page(), 10);
        assert_eq!(pager.window().to_string(), "1 … 9 10 11 … 20");
    }

    #[test]
    fn test_paginator_render_suppression() {
        assert!(!Paginator::new(1, 0).should_render());
        assert!(!Paginator::new(1, 1).should_render());
        assert!(Paginator::new(1, 2).should_render());
    }

    #[test]
    fn test_paginator_set_total_reclamps() {
        let mut pager = Paginator::new(15, 20);
        pager.set_total(5);
        assert_eq!(pager.current_page(), 5);
        pager.set_total(0);
        assert_eq!(pager.current_page(), 1);
    }
}
