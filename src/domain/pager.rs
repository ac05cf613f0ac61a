//! Pager - Current Page Tracking for the Pagination Component

use crate::domain::page_range::{page_range, PageRangeItem, PageRangeRequest};

/// Page selection state behind a pagination control
///
/// Works uncontrolled (the pager owns the page) or controlled, where the
/// owner pushes its value through [`Pager::sync`] on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    total: usize,
    current: usize,
    disabled: bool,
}

impl Pager {
    /// Create a pager on the first page
    pub fn new(total: usize) -> Self {
        Self::with_default(total, 1)
    }

    /// Create a pager starting on `default_page`
    pub fn with_default(total: usize, default_page: usize) -> Self {
        Self {
            total,
            current: clamp_page(default_page, total),
            disabled: false,
        }
    }

    /// Get the current page
    pub fn current(&self) -> usize {
        self.current
    }

    /// Get the total page count
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if page changes are ignored
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set disabled state
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Update the total page count, keeping the current page in range
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.current = clamp_page(self.current, total);
    }

    /// Adopt a controlled value
    pub fn sync(&mut self, value: Option<usize>) {
        if let Some(value) = value {
            self.current = clamp_page(value, self.total);
        }
    }

    /// Move to `page`, clamped into range.
    ///
    /// Returns the page to report through `on_change`, or `None` while
    /// disabled. Selecting the current page reports it again.
    pub fn set_page(&mut self, page: usize) -> Option<usize> {
        if self.disabled {
            return None;
        }
        self.current = clamp_page(page, self.total);
        Some(self.current)
    }

    /// Jump to the first page
    pub fn first(&mut self) -> Option<usize> {
        self.set_page(1)
    }

    /// Go back one page
    pub fn previous(&mut self) -> Option<usize> {
        self.set_page(self.current.saturating_sub(1))
    }

    /// Go forward one page
    pub fn next(&mut self) -> Option<usize> {
        self.set_page(self.current.saturating_add(1))
    }

    /// Jump to the last page
    pub fn last(&mut self) -> Option<usize> {
        self.set_page(self.total)
    }

    /// Whether the previous/first controls are enabled
    pub fn can_previous(&self) -> bool {
        !self.disabled && self.current > 1
    }

    /// Whether the next/last controls are enabled
    pub fn can_next(&self) -> bool {
        !self.disabled && self.current < self.total
    }

    /// Items to render for the current page
    pub fn items(&self, sibling_count: i64, boundary_count: i64) -> Vec<PageRangeItem> {
        let request = PageRangeRequest::new(to_i64(self.total), to_i64(self.current))
            .siblings(sibling_count)
            .boundaries(boundary_count);
        page_range(&request)
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(1)
    }
}

fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, total.max(1))
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_page_clamps_and_reports() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.set_page(4), Some(4));
        assert_eq!(pager.set_page(0), Some(1));
        assert_eq!(pager.set_page(99), Some(10));
        assert_eq!(pager.current(), 10);
        assert_eq!(pager.set_page(10), Some(10));
    }

    #[test]
    fn disabled_pager_ignores_changes() {
        let mut pager = Pager::with_default(10, 3);
        pager.set_disabled(true);
        assert_eq!(pager.next(), None);
        assert_eq!(pager.current(), 3);
        assert!(!pager.can_next());
        assert!(!pager.can_previous());
    }

    #[test]
    fn navigation_helpers() {
        let mut pager = Pager::new(5);
        assert!(!pager.can_previous());
        assert_eq!(pager.previous(), Some(1));
        assert_eq!(pager.next(), Some(2));
        assert_eq!(pager.last(), Some(5));
        assert!(!pager.can_next());
        assert_eq!(pager.next(), Some(5));
        assert_eq!(pager.first(), Some(1));
    }

    #[test]
    fn controlled_value_is_adopted() {
        let mut pager = Pager::new(8);
        pager.sync(None);
        assert_eq!(pager.current(), 1);
        pager.sync(Some(6));
        assert_eq!(pager.current(), 6);
        pager.sync(Some(20));
        assert_eq!(pager.current(), 8);
    }

    #[test]
    fn shrinking_total_keeps_page_in_range() {
        let mut pager = Pager::with_default(10, 9);
        pager.set_total(4);
        assert_eq!(pager.current(), 4);
        pager.set_total(0);
        assert_eq!(pager.current(), 1);
        assert!(pager.items(1, 1).is_empty());
    }

    #[test]
    fn items_follow_current_page() {
        let pager = Pager::with_default(10, 10);
        let pages: Vec<_> = pager.items(1, 1).iter().map(|i| i.page()).collect();
        assert_eq!(
            pages,
            vec![Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
    }
}
