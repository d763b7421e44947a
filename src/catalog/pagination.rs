//! Client-side pagination over the derived catalog.

use serde::Serialize;

/// Number of products shown per page.
pub const PAGE_SIZE: usize = 10;

/// Pagination state for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based page being shown. May lie past the last page.
    pub current_page: usize,
    /// Number of items across all pages
    pub total_items: usize,
}

impl Pagination {
    /// Creates pagination state for a page and item count.
    pub fn new(current_page: usize, total_items: usize) -> Self {
        Self { current_page: current_page.max(1), total_items }
    }

    /// Returns the number of pages; zero items means zero pages.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(PAGE_SIZE)
    }

    /// Returns the index range of the current page, empty when out of range.
    pub fn range(&self) -> std::ops::Range<usize> {
        let first = self.current_page.saturating_sub(1).saturating_mul(PAGE_SIZE);
        let last = self.current_page.saturating_mul(PAGE_SIZE);
        first.min(self.total_items)..last.min(self.total_items)
    }

    /// Returns the current page's slice of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        let end = range.end.min(items.len());
        &items[range.start.min(end)..end]
    }

    /// Clamps a requested page to `[1, total_pages]`, with 1 as the floor.
    pub fn clamp(&self, page: usize) -> usize {
        page.min(self.total_pages()).max(1)
    }

    /// Page reached by the "Prev" button.
    pub fn prev(&self) -> usize {
        self.clamp(self.current_page.saturating_sub(1))
    }

    /// Page reached by the "Next" button.
    pub fn next(&self) -> usize {
        self.clamp(self.current_page.saturating_add(1))
    }

    /// "Prev" is disabled on the first page.
    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1
    }

    /// "Next" is disabled on the last page.
    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages()
    }
}
