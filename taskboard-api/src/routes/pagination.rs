/// Pagination parameters and response envelope for list endpoints
///
/// Top-level list endpoints (`GET /api/users/`, `GET /api/tasks/`) return
/// an envelope with the total count and nullable next/previous page
/// numbers:
///
/// ```json
/// {
///   "count": 123,
///   "next": 3,
///   "previous": 1,
///   "results": [ ... ]
/// }
/// ```
///
/// Sub-resource lists (per-user tasks, completed/pending filters) return
/// plain arrays.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by paginated list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    /// 1-based page number (default: 1)
    pub page: Option<u32>,

    /// Items per page (default: 50, capped at 100)
    pub page_size: Option<u32>,
}

impl PageParams {
    pub const DEFAULT_PAGE_SIZE: u32 = 50;
    pub const MAX_PAGE_SIZE: u32 = 100;

    /// Effective page number, clamped to at least 1
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// Effective page size, clamped to 1..=MAX_PAGE_SIZE
    pub fn page_size(&self) -> u32 {
        self.page_size
            .unwrap_or(Self::DEFAULT_PAGE_SIZE)
            .clamp(1, Self::MAX_PAGE_SIZE)
    }

    /// SQL LIMIT for this page
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size())
    }

    /// SQL OFFSET for this page
    pub fn offset(&self) -> i64 {
        i64::from(self.page() - 1) * i64::from(self.page_size())
    }
}

/// Paginated response envelope
#[derive(Debug, Serialize)]
pub struct Page<T> {
    /// Total number of rows across all pages
    pub count: i64,

    /// Next page number, if one exists
    pub next: Option<u32>,

    /// Previous page number, if one exists
    pub previous: Option<u32>,

    /// Rows on this page
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Wraps one page of results, deriving next/previous from the total
    pub fn new(count: i64, params: &PageParams, results: Vec<T>) -> Self {
        let page = params.page();
        let page_size = params.page_size();

        let has_next = i64::from(page) * i64::from(page_size) < count;
        let next = if has_next { Some(page + 1) } else { None };
        let previous = if page > 1 { Some(page - 1) } else { None };

        Self {
            count,
            next,
            previous,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: Option<u32>, page_size: Option<u32>) -> PageParams {
        PageParams { page, page_size }
    }

    #[test]
    fn test_defaults() {
        let p = params(None, None);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), PageParams::DEFAULT_PAGE_SIZE);
        assert_eq!(p.limit(), 50);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_page_size_is_capped() {
        let p = params(None, Some(10_000));
        assert_eq!(p.page_size(), PageParams::MAX_PAGE_SIZE);

        let p = params(None, Some(0));
        assert_eq!(p.page_size(), 1);
    }

    #[test]
    fn test_zero_page_is_clamped() {
        let p = params(Some(0), None);
        assert_eq!(p.page(), 1);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_offset_for_later_pages() {
        let p = params(Some(3), Some(20));
        assert_eq!(p.limit(), 20);
        assert_eq!(p.offset(), 40);
    }

    #[test]
    fn test_envelope_first_of_many_pages() {
        let page: Page<i32> = Page::new(120, &params(Some(1), Some(50)), vec![1, 2, 3]);
        assert_eq!(page.count, 120);
        assert_eq!(page.next, Some(2));
        assert_eq!(page.previous, None);
    }

    #[test]
    fn test_envelope_middle_page() {
        let page: Page<i32> = Page::new(120, &params(Some(2), Some(50)), vec![]);
        assert_eq!(page.next, Some(3));
        assert_eq!(page.previous, Some(1));
    }

    #[test]
    fn test_envelope_last_page() {
        let page: Page<i32> = Page::new(120, &params(Some(3), Some(50)), vec![]);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, Some(2));
    }

    #[test]
    fn test_envelope_single_page() {
        let page: Page<i32> = Page::new(3, &params(None, None), vec![1, 2, 3]);
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
    }
}
