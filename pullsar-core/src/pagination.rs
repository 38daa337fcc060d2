//! Page-window computation for bounded-width pager controls.
//!
//! A pager shows the first and last page, a window of up to five pages centered
//! on the current one, and a gap marker wherever pages were skipped:
//!
//! ```
//! use pullsar_core::pagination::{compute_window, PageEntry::{Gap, Page}};
//!
//! assert_eq!(
//!     compute_window(6, 10),
//!     vec![Page(1), Gap, Page(4), Page(5), Page(6), Page(7), Page(8), Gap, Page(10)],
//! );
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Page sets at or below this size are rendered without collapsing.
const SMALL_SET: u32 = 5;

/// Pages shown on each side of the current page.
const RADIUS: u32 = 2;

/// One label of a pager control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageEntry {
    /// A concrete, 1-indexed page number.
    Page(u32),
    /// Collapsed run of pages, rendered as an ellipsis.
    Gap,
}

impl PageEntry {
    /// The page number, or `None` for a gap.
    #[must_use]
    pub const fn page(self) -> Option<u32> {
        match self {
            Self::Page(p) => Some(p),
            Self::Gap => None,
        }
    }

    /// True for a gap marker.
    #[must_use]
    pub const fn is_gap(self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl fmt::Display for PageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(p) => write!(f, "{p}"),
            Self::Gap => f.write_str("…"),
        }
    }
}

/// Ordered labels for a pager control.
pub type PageSet = Vec<PageEntry>;

/// Compute the page labels for `current_page` out of `total_pages`.
///
/// - `total_pages == 0` yields an empty set.
/// - Up to five pages are listed in full regardless of `current_page`.
/// - Otherwise the first and last page are always present, along with the pages
///   within two of `current_page`; a single `Gap` separates non-adjacent pages.
///
/// `current_page` is not validated. Out-of-range values simply contribute
/// fewer pages from the centered window.
#[must_use]
pub fn compute_window(current_page: u32, total_pages: u32) -> PageSet {
    if total_pages <= SMALL_SET {
        return (1..=total_pages).map(PageEntry::Page).collect();
    }

    let mut pages: BTreeSet<u32> = BTreeSet::new();
    pages.insert(1);
    pages.insert(total_pages);

    let lo = current_page.saturating_sub(RADIUS).max(2);
    let hi = current_page
        .saturating_add(RADIUS)
        .min(total_pages.saturating_sub(1));
    pages.extend(lo..=hi);

    let mut out: PageSet = Vec::with_capacity(pages.len() * 2);
    let mut last: Option<u32> = None;
    for page in pages {
        if let Some(prev) = last
            && page - prev > 1
        {
            out.push(PageEntry::Gap);
        }
        out.push(PageEntry::Page(page));
        last = Some(page);
    }
    out
}

/// Number of pages needed for `total_count` items at `page_size` per page.
///
/// A zero `page_size` yields zero pages; counts beyond `u32::MAX` pages saturate.
#[must_use]
pub fn total_pages(total_count: u64, page_size: u64) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total_count.div_ceil(page_size)).unwrap_or(u32::MAX)
}

/// State of a pager control: where the user is, and what to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pager {
    current: u32,
    total_pages: u32,
    entries: PageSet,
}

impl Pager {
    /// Build the pager for `current` out of `total_pages`.
    #[must_use]
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            current,
            total_pages,
            entries: compute_window(current, total_pages),
        }
    }

    /// Build the pager from a paginated envelope's counts.
    #[must_use]
    pub fn from_counts(current: u32, total_count: u64, page_size: u64) -> Self {
        Self::new(current, total_pages(total_count, page_size))
    }

    /// Current page (1-indexed).
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Labels to render between the previous and next buttons.
    #[must_use]
    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// The control is hidden when everything fits on one page.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Whether `page` is the highlighted entry.
    #[must_use]
    pub const fn is_active(&self, page: u32) -> bool {
        self.current == page
    }

    /// The previous button is disabled on the first page.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// The next button is disabled on the last page.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current < self.total_pages
    }

    /// Page requested by the previous button, if enabled.
    #[must_use]
    pub const fn previous(&self) -> Option<u32> {
        if self.has_previous() {
            Some(self.current - 1)
        } else {
            None
        }
    }

    /// Page requested by the next button, if enabled.
    #[must_use]
    pub const fn next(&self) -> Option<u32> {
        if self.has_next() {
            Some(self.current + 1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageEntry::{Gap, Page};
    use super::*;

    #[test]
    fn zero_pages_is_empty() {
        assert!(compute_window(1, 0).is_empty());
        assert!(compute_window(0, 0).is_empty());
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            compute_window(1, 10),
            vec![Page(1), Page(2), Page(3), Gap, Page(10)]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            compute_window(10, 10),
            vec![Page(1), Gap, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn near_start_has_no_leading_gap() {
        assert_eq!(
            compute_window(3, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Gap, Page(10)]
        );
        assert_eq!(
            compute_window(4, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Gap, Page(10)]
        );
    }

    #[test]
    fn out_of_range_current_degenerates_quietly() {
        assert_eq!(compute_window(0, 8), vec![Page(1), Page(2), Gap, Page(8)]);
        assert_eq!(compute_window(50, 8), vec![Page(1), Gap, Page(8)]);
        assert_eq!(
            compute_window(u32::MAX, u32::MAX),
            vec![Page(1), Gap, Page(u32::MAX - 2), Page(u32::MAX - 1), Page(u32::MAX)]
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn pager_buttons() {
        let p = Pager::from_counts(1, 95, 10);
        assert_eq!(p.total_pages(), 10);
        assert!(p.is_visible());
        assert_eq!(p.previous(), None);
        assert_eq!(p.next(), Some(2));
        assert!(p.is_active(1));

        let last = Pager::new(10, 10);
        assert_eq!(last.next(), None);
        assert_eq!(last.previous(), Some(9));

        assert!(!Pager::new(1, 1).is_visible());
    }

    #[test]
    fn gap_renders_as_ellipsis() {
        let labels: Vec<String> = compute_window(1, 10).iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["1", "2", "3", "…", "10"]);
    }
}
