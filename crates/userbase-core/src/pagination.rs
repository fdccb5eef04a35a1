//! Pagination types for list operations.
//!
//! Pages are 1-based. Out-of-range requests are clamped rather than rejected,
//! and a page past the end is simply empty.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-based).
    pub page: u32,
    /// The number of items per page.
    pub per_page: u32,
}

impl PageRequest {
    /// The default page number.
    pub const DEFAULT_PAGE: u32 = 1;
    /// The default page size.
    pub const DEFAULT_PER_PAGE: u32 = 10;

    /// Creates a new page request.
    ///
    /// `page < 1` becomes 1 and `per_page < 1` falls back to the default.
    /// Any positive `per_page` is honoured as given.
    #[must_use]
    pub fn new(page: i64, per_page: i64) -> Self {
        let page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        let per_page = if per_page < 1 {
            Self::DEFAULT_PER_PAGE
        } else {
            u32::try_from(per_page).unwrap_or(u32::MAX)
        };
        Self { page, per_page }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: Self::DEFAULT_PAGE,
            per_page: Self::DEFAULT_PER_PAGE,
        }
    }

    /// Returns the offset for database queries.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.per_page as u64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The current page number (1-based).
    pub page: u32,
    /// The number of items per page.
    pub per_page: u32,
    /// The total number of items across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
        }
    }

    /// Returns the total number of pages, `ceil(total / per_page)`.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.per_page == 0 {
            0
        } else {
            self.total.div_ceil(self.per_page as u64)
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request() {
        let req = PageRequest::new(3, 10);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
    }

    #[test]
    fn test_page_request_first() {
        let req = PageRequest::first();
        assert_eq!(req.page, 1);
        assert_eq!(req.per_page, 10);
        assert_eq!(req.offset(), 0);
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn test_page_request_clamps_page() {
        assert_eq!(PageRequest::new(0, 5).page, 1);
        assert_eq!(PageRequest::new(-7, 5).page, 1);
        assert_eq!(PageRequest::new(0, 5).offset(), 0);
    }

    #[test]
    fn test_page_request_per_page_bounds() {
        assert_eq!(PageRequest::new(1, 0).per_page, PageRequest::DEFAULT_PER_PAGE);
        assert_eq!(PageRequest::new(1, -3).per_page, PageRequest::DEFAULT_PER_PAGE);
        assert_eq!(PageRequest::new(1, 100).per_page, 100);
        assert_eq!(PageRequest::new(1, 1000).per_page, 1000);
        assert_eq!(PageRequest::new(1, i64::MAX).per_page, u32::MAX);
    }

    #[test]
    fn test_large_per_page_fits_everything_on_one_page() {
        let page: Page<i32> = Page::new((0..120).collect(), PageRequest::new(1, 200), 120);
        assert_eq!(page.len(), 120);
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_page_request_huge_page_does_not_overflow() {
        let req = PageRequest::new(i64::MAX, 100);
        assert_eq!(req.page, u32::MAX);
        assert_eq!(req.offset(), (u64::from(u32::MAX) - 1) * 100);
    }

    #[test]
    fn test_total_pages() {
        let page: Page<i32> = Page::new(vec![3, 4], PageRequest::new(2, 2), 5);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.len(), 2);
    }

    #[test]
    fn test_no_rows_means_no_pages() {
        let page: Page<i32> = Page::new(Vec::new(), PageRequest::first(), 0);
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_page_past_the_end_keeps_metadata() {
        let page: Page<i32> = Page::new(Vec::new(), PageRequest::new(9, 10), 25);
        assert!(page.is_empty());
        assert_eq!(page.page, 9);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_page_into_iter() {
        let page = Page::new(vec!["a", "b"], PageRequest::first(), 2);
        let collected: Vec<_> = page.into_iter().collect();
        assert_eq!(collected, vec!["a", "b"]);
    }
}
