//! Page Range - Pagination Item Computation
//!
//! Maps (total pages, current page, sibling count, boundary count) to the
//! ordered list of page buttons and collapse markers a pager renders.

use crate::constants::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT};

/// A single entry of a page range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRangeItem {
    /// A selectable page (1-based)
    Page(usize),
    /// A non-interactive marker for a collapsed run of pages
    Ellipsis,
}

impl PageRangeItem {
    /// Get the page number, if this item is a page
    pub fn page(&self) -> Option<usize> {
        match self {
            PageRangeItem::Page(page) => Some(*page),
            PageRangeItem::Ellipsis => None,
        }
    }

    /// Check if this item is a collapse marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageRangeItem::Ellipsis)
    }
}

/// Input of the page range computation
///
/// All fields are signed so any value a caller holds is representable.
/// Negative totals and counts are treated as zero, and `current` is clamped
/// into `[1, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRangeRequest {
    /// Total number of pages
    pub total: i64,
    /// Currently selected page (1-based)
    pub current: i64,
    /// Pages shown on each side of the current page
    pub sibling_count: i64,
    /// Pages always shown at the start and the end
    pub boundary_count: i64,
}

impl PageRangeRequest {
    /// Create a request with the default sibling and boundary counts
    pub fn new(total: i64, current: i64) -> Self {
        Self {
            total,
            current,
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
        }
    }

    /// Set the sibling count
    pub fn siblings(mut self, sibling_count: i64) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Set the boundary count
    pub fn boundaries(mut self, boundary_count: i64) -> Self {
        self.boundary_count = boundary_count;
        self
    }
}

impl Default for PageRangeRequest {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Compute the items a pager should render.
///
/// Numeric items are strictly increasing and lie in `[1, total]`. At most two
/// ellipsis markers appear and never next to each other. The sibling window
/// around the current page is always present, either on its own or as part
/// of an extended run that replaces a suppressed ellipsis.
///
/// With zero or one boundary page the runs are `total_numbers` long and two
/// boundary slots are reserved. Wider boundaries reserve one slot per
/// boundary page on each side and lengthen the extended runs to match, so
/// the sibling window is never cut off.
pub fn page_range(request: &PageRangeRequest) -> Vec<PageRangeItem> {
    let total = request.total.max(0);
    if total == 0 {
        return Vec::new();
    }

    let siblings = request.sibling_count.max(0);
    let boundaries = request.boundary_count.max(0);
    let current = request.current.clamp(1, total);

    // Current page, its siblings and the two slots next to the ellipses
    let total_numbers = siblings.saturating_mul(2).saturating_add(3);
    let reserved = boundaries.max(1);
    let total_buttons = total_numbers.saturating_add(reserved.saturating_mul(2));

    if total_buttons >= total {
        return pages(1, total).collect();
    }

    let left_index = current.saturating_sub(siblings).max(boundaries);
    let right_index = current
        .saturating_add(siblings)
        .min(total - boundaries + 1);

    let show_left_ellipsis = left_index > boundaries + 2;
    let show_right_ellipsis = right_index < total - boundaries - 1;

    // Run that absorbs one boundary group plus its ellipsis slot
    let extended_run = total_numbers + reserved - 1;

    let mut items = Vec::new();
    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            items.extend(pages(1, extended_run));
            items.push(PageRangeItem::Ellipsis);
            items.extend(pages(total - boundaries + 1, total));
        }
        (true, false) => {
            items.extend(pages(1, boundaries));
            items.push(PageRangeItem::Ellipsis);
            items.extend(pages(total - extended_run + 1, total));
        }
        // (false, false) cannot happen once total_buttons < total
        _ => {
            items.extend(pages(1, boundaries));
            items.push(PageRangeItem::Ellipsis);
            items.extend(pages(left_index, right_index));
            items.push(PageRangeItem::Ellipsis);
            items.extend(pages(total - boundaries + 1, total));
        }
    }

    items
}

/// Inclusive run of page items; empty when `start > end`
fn pages(start: i64, end: i64) -> impl Iterator<Item = PageRangeItem> {
    (start.max(1)..=end)
        .filter_map(|page| usize::try_from(page).ok())
        .map(PageRangeItem::Page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const E: PageRangeItem = PageRangeItem::Ellipsis;

    fn p(page: usize) -> PageRangeItem {
        PageRangeItem::Page(page)
    }

    fn numbers(items: &[PageRangeItem]) -> Vec<usize> {
        items.iter().filter_map(PageRangeItem::page).collect()
    }

    #[test]
    fn first_page_collapses_right_side() {
        let items = page_range(&PageRangeRequest::new(10, 1));
        assert_eq!(items, vec![p(1), p(2), p(3), p(4), p(5), E, p(10)]);
    }

    #[test]
    fn last_page_collapses_left_side() {
        let items = page_range(&PageRangeRequest::new(10, 10));
        assert_eq!(items, vec![p(1), E, p(6), p(7), p(8), p(9), p(10)]);
    }

    #[test]
    fn middle_page_collapses_both_sides() {
        let items = page_range(&PageRangeRequest::new(10, 5));
        assert_eq!(items, vec![p(1), E, p(4), p(5), p(6), E, p(10)]);
    }

    #[test]
    fn small_total_is_not_collapsed() {
        let items = page_range(&PageRangeRequest::new(5, 3));
        assert_eq!(items, vec![p(1), p(2), p(3), p(4), p(5)]);
    }

    #[test]
    fn exactly_fitting_total_is_not_collapsed() {
        let items = page_range(&PageRangeRequest::new(7, 4));
        assert_eq!(numbers(&items), (1..=7).collect::<Vec<_>>());
        assert!(!items.iter().any(PageRangeItem::is_ellipsis));
    }

    #[test]
    fn empty_and_single_page() {
        assert!(page_range(&PageRangeRequest::new(0, 1)).is_empty());
        assert!(page_range(&PageRangeRequest::new(-4, 1)).is_empty());
        assert_eq!(page_range(&PageRangeRequest::new(1, 1)), vec![p(1)]);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(
            page_range(&PageRangeRequest::new(10, -3)),
            page_range(&PageRangeRequest::new(10, 1))
        );
        assert_eq!(
            page_range(&PageRangeRequest::new(10, 99)),
            page_range(&PageRangeRequest::new(10, 10))
        );
    }

    #[test]
    fn negative_counts_behave_like_zero() {
        let negative = PageRangeRequest::new(20, 10).siblings(-2).boundaries(-1);
        let zero = PageRangeRequest::new(20, 10).siblings(0).boundaries(0);
        assert_eq!(page_range(&negative), page_range(&zero));
        assert_eq!(page_range(&zero), vec![E, p(10), E]);
    }

    /// Runs are `total_numbers` long and two boundary slots are reserved,
    /// whatever the boundary count
    fn fixed_slot_range(total: i64, current: i64, siblings: i64, boundaries: i64) -> Vec<PageRangeItem> {
        let run = |start: i64, end: i64| (start..=end).map(|page| p(page as usize)).collect::<Vec<_>>();
        if total <= 0 {
            return Vec::new();
        }
        let current = current.clamp(1, total);
        let total_numbers = siblings * 2 + 3;
        if total_numbers + 2 >= total {
            return run(1, total);
        }
        let left = (current - siblings).max(boundaries);
        let right = (current + siblings).min(total - boundaries + 1);
        let show_left = left > boundaries + 2;
        let show_right = right < total - (boundaries + 1);

        let mut items = Vec::new();
        if !show_left && show_right {
            items.extend(run(1, total_numbers));
            items.push(E);
            items.extend(run(total - boundaries + 1, total));
        } else if show_left && !show_right {
            items.extend(run(1, boundaries));
            items.push(E);
            items.extend(run(total - total_numbers + 1, total));
        } else {
            items.extend(run(1, boundaries));
            items.push(E);
            items.extend(run(left, right));
            items.push(E);
            items.extend(run(total - boundaries + 1, total));
        }
        items
    }

    #[test]
    fn zero_boundaries_fit_within_two_reserved_slots() {
        let fits = PageRangeRequest::new(4, 1).siblings(0).boundaries(0);
        assert_eq!(page_range(&fits), vec![p(1), p(2), p(3), p(4)]);

        let fits = PageRangeRequest::new(5, 3).siblings(0).boundaries(0);
        assert_eq!(page_range(&fits), vec![p(1), p(2), p(3), p(4), p(5)]);
    }

    #[test]
    fn zero_boundaries_collapse_to_the_edges() {
        let start = PageRangeRequest::new(10, 1).siblings(0).boundaries(0);
        assert_eq!(page_range(&start), vec![p(1), p(2), p(3), E]);

        let end = PageRangeRequest::new(10, 10).siblings(0).boundaries(0);
        assert_eq!(page_range(&end), vec![E, p(8), p(9), p(10)]);
    }

    #[test]
    fn small_boundaries_use_fixed_slots() {
        for total in 0..=30_i64 {
            for siblings in 0..=3_i64 {
                for boundaries in 0..=1_i64 {
                    for current in -1..=total + 1 {
                        let request = PageRangeRequest::new(total, current)
                            .siblings(siblings)
                            .boundaries(boundaries);
                        assert_eq!(
                            page_range(&request),
                            fixed_slot_range(total, current, siblings, boundaries),
                            "{request:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn wider_boundaries_keep_window_visible() {
        // Fixed slots would end the leading run at 5 and drop sibling 6
        let request = PageRangeRequest::new(20, 5).boundaries(2);
        assert_eq!(
            page_range(&request),
            vec![p(1), p(2), p(3), p(4), p(5), p(6), E, p(19), p(20)]
        );

        let request = PageRangeRequest::new(20, 10).boundaries(2);
        assert_eq!(
            page_range(&request),
            vec![p(1), p(2), E, p(9), p(10), p(11), E, p(19), p(20)]
        );
    }

    #[test]
    fn single_hidden_page_is_shown_instead_of_ellipsis() {
        // Page 2 would be the only collapsed page on the left
        let items = page_range(&PageRangeRequest::new(10, 4));
        assert_eq!(items, vec![p(1), p(2), p(3), p(4), p(5), E, p(10)]);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let request = PageRangeRequest::new(42, 17).siblings(2).boundaries(3);
        assert_eq!(page_range(&request), page_range(&request));
    }

    #[test]
    fn item_accessors() {
        assert_eq!(p(3).page(), Some(3));
        assert_eq!(E.page(), None);
        assert!(E.is_ellipsis());
        assert!(!p(1).is_ellipsis());
    }

    #[test]
    fn invariants_hold_across_parameter_grid() {
        for total in 0..=30_i64 {
            for siblings in 0..=3_i64 {
                for boundaries in 0..=3_i64 {
                    for current in -1..=total + 1 {
                        let request = PageRangeRequest::new(total, current)
                            .siblings(siblings)
                            .boundaries(boundaries);
                        let items = page_range(&request);
                        let nums = numbers(&items);
                        let context = format!("{request:?} -> {items:?}");

                        // Bounded, strictly increasing, no duplicates
                        assert!(nums.len() as i64 <= total, "{context}");
                        assert!(nums.iter().all(|&n| n >= 1 && n as i64 <= total), "{context}");
                        assert!(nums.windows(2).all(|w| w[0] < w[1]), "{context}");

                        // Ellipsis markers
                        let ellipses = items.iter().filter(|i| i.is_ellipsis()).count();
                        assert!(ellipses <= 2, "{context}");
                        assert!(
                            items.windows(2).all(|w| !(w[0].is_ellipsis() && w[1].is_ellipsis())),
                            "{context}"
                        );

                        // Everything fits: full contiguous range
                        let total_buttons = siblings * 2 + 3 + 2 * boundaries.max(1);
                        if siblings * 2 + 3 + 2 >= total || total_buttons >= total {
                            assert_eq!(nums, (1..=total as usize).collect::<Vec<_>>(), "{context}");
                            assert_eq!(ellipses, 0, "{context}");
                        }

                        if total == 0 {
                            continue;
                        }

                        // Boundary runs and sibling window are present
                        let current = current.clamp(1, total);
                        let window = (current - siblings).max(1)..=(current + siblings).min(total);
                        let leading = 1..=boundaries.min(total);
                        let trailing = (total - boundaries + 1).max(1)..=total;
                        for page in window.chain(leading).chain(trailing) {
                            assert!(nums.contains(&(page as usize)), "missing {page}: {context}");
                        }

                        // Each ellipsis stands for at least two hidden pages
                        for (idx, item) in items.iter().enumerate() {
                            if !item.is_ellipsis() {
                                continue;
                            }
                            let before = idx
                                .checked_sub(1)
                                .and_then(|i| items[i].page())
                                .unwrap_or(0);
                            let after = items
                                .get(idx + 1)
                                .and_then(PageRangeItem::page)
                                .unwrap_or(total as usize + 1);
                            assert!(after - before > 2, "{context}");
                        }
                    }
                }
            }
        }
    }
}
