//! Listing pages and pagination.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    pub per_page: usize,
    /// Number of items matching the query, across all pages.
    pub total: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    /// Index of the first item on this page.
    pub offset: usize,
}

impl Pagination {
    /// Create pagination info. `page` and `per_page` are raised to at least 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
            offset: (page - 1).saturating_mul(per_page),
        }
    }

    /// 1-indexed number of the first item shown, 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.offset >= self.total {
            0
        } else {
            self.offset + 1
        }
    }

    /// 1-indexed number of the last item shown, 0 when empty.
    pub fn end_item(&self) -> usize {
        if self.offset >= self.total {
            0
        } else {
            self.page.saturating_mul(self.per_page).min(self.total)
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 24, 0)
    }
}

/// One page of listing results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Cut one page out of an already filtered and sorted list.
    pub fn from_items(all: Vec<T>, page: usize, per_page: usize) -> Self {
        let pagination = Pagination::new(page, per_page, all.len());
        let items = all
            .into_iter()
            .skip(pagination.offset)
            .take(pagination.per_page)
            .collect();
        Self { items, pagination }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination() {
        let p = Pagination::new(2, 10, 25);
        assert_eq!(p.total_pages, 3);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset, 10);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);
    }

    #[test]
    fn test_empty_pagination() {
        let p = Pagination::new(1, 10, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_page_past_the_end() {
        let page = Page::from_items(vec![1, 2, 3], 5, 2);
        assert!(page.is_empty());
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.start_item(), 0);
        assert_eq!(page.pagination.end_item(), 0);
    }

    #[test]
    fn test_huge_page_number() {
        let p = Pagination::new(usize::MAX, 24, 6);
        assert_eq!(p.offset, usize::MAX);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
        assert!(!p.has_next);

        let page = Page::from_items((1..=6).collect::<Vec<_>>(), usize::MAX, 100);
        assert!(page.is_empty());
    }

    #[test]
    fn test_offset_is_serialized() {
        let json = serde_json::to_value(Pagination::new(3, 10, 25)).unwrap();
        assert_eq!(json["offset"], 20);
        assert_eq!(json["perPage"], 10);
        assert_eq!(json["totalPages"], 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let page = Page::from_items((1..=5).collect(), 3, 2);
        assert_eq!(page.items, vec![5]);
        assert!(!page.pagination.has_next);
    }
}
