//! Pagination window arithmetic
//!
//! Pages are 1-indexed. A pagination state always has at least one page,
//! even when there are no items, so the control can render a degenerate
//! "Showing 0-0 of 0" strip.

use crate::MAX_FULL_PAGE_STRIP;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// One entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageItem::Page(n) => write!(f, "{}", n),
            PageItem::Ellipsis => f.write_str("…"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_items: 0,
        }
    }

    pub fn with_total(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.page_size)
    }

    /// Requested page clamped into `1..=total_pages`
    pub fn current_page(&self) -> usize {
        self.page.clamp(1, self.total_pages())
    }

    /// 1-indexed position of the first visible item, 0 when empty
    pub fn start_item(&self) -> usize {
        if self.total_items == 0 {
            return 0;
        }
        (self.current_page() - 1) * self.page_size + 1
    }

    /// 1-indexed position of the last visible item
    pub fn end_item(&self) -> usize {
        (self.current_page() * self.page_size).min(self.total_items)
    }

    /// 0-indexed half-open range of the visible slice
    pub fn range(&self) -> Range<usize> {
        let start = ((self.current_page() - 1) * self.page_size).min(self.total_items);
        start..self.end_item()
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    pub fn status_text(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.start_item(),
            self.end_item(),
            self.total_items
        )
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        page_window(self.current_page(), self.total_pages())
    }

    pub fn is_first(&self) -> bool {
        self.current_page() == 1
    }

    pub fn is_last(&self) -> bool {
        self.current_page() == self.total_pages()
    }

    /// Navigation targets; `None` means the control is disabled
    pub fn first_target(&self) -> Option<usize> {
        (!self.is_first()).then_some(1)
    }

    pub fn prev_target(&self) -> Option<usize> {
        (!self.is_first()).then(|| self.current_page() - 1)
    }

    pub fn next_target(&self) -> Option<usize> {
        (!self.is_last()).then(|| self.current_page() + 1)
    }

    pub fn last_target(&self) -> Option<usize> {
        (!self.is_last()).then(|| self.total_pages())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// Changing the page size always returns to the first page
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// A new filtered set always returns to the first page
    pub fn set_total(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.page = 1;
    }
}

/// `ceil(total_items / page_size)`, never less than 1
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Page-number strip for `current` of `total_pages`.
///
/// Short strips list every page. Longer strips keep the first and last page
/// plus the neighbours of `current`, with an ellipsis for each gap.
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= MAX_FULL_PAGE_STRIP {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let lo = current.saturating_sub(1).max(2);
    let hi = (current + 1).min(total_pages - 1);
    items.extend((lo..=hi).map(PageItem::Page));
    if current + 2 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Ellipsis, Page};

    #[test]
    fn test_second_page_of_25() {
        let state = PaginationState::new(10).with_total(25).with_page(2);
        assert_eq!(state.range(), 10..20);
        assert_eq!(state.status_text(), "Showing 11-20 of 25");
    }

    #[test]
    fn test_partial_last_page() {
        let state = PaginationState::new(10).with_total(25).with_page(3);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.status_text(), "Showing 21-25 of 25");
        assert_eq!(state.range(), 20..25);
    }

    #[test]
    fn test_empty_is_single_page() {
        let state = PaginationState::new(10);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.status_text(), "Showing 0-0 of 0");
        assert_eq!(state.page_window(), vec![Page(1)]);
        assert!(state.first_target().is_none());
        assert!(state.last_target().is_none());
    }

    #[test]
    fn test_truncated_window() {
        assert_eq!(
            page_window(10, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn test_window_edges() {
        assert_eq!(
            page_window(1, 20),
            vec![Page(1), Page(2), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(3, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(20)]
        );
        assert_eq!(
            page_window(20, 20),
            vec![Page(1), Ellipsis, Page(19), Page(20)]
        );
        assert_eq!(
            page_window(18, 20),
            vec![Page(1), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_short_window_lists_everything() {
        assert_eq!(page_window(4, 7).len(), 7);
        assert!(page_window(4, 7).iter().all(|item| matches!(item, Page(_))));
    }

    #[test]
    fn test_navigation_targets() {
        let mut state = PaginationState::new(10).with_total(95);
        assert_eq!(state.first_target(), None);
        assert_eq!(state.prev_target(), None);
        assert_eq!(state.next_target(), Some(2));
        assert_eq!(state.last_target(), Some(10));

        state.set_page(10);
        assert_eq!(state.prev_target(), Some(9));
        assert_eq!(state.next_target(), None);
        assert_eq!(state.last_target(), None);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = PaginationState::new(10).with_total(95).with_page(4);
        state.set_page_size(25);
        assert_eq!(state.page, 1);
        assert_eq!(state.total_pages(), 4);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let state = PaginationState::new(10).with_total(25).with_page(9);
        assert_eq!(state.current_page(), 3);
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(state.slice(&items), &items[20..25]);
    }
}
