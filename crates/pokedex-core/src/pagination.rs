//! Pagination over in-memory result sets.

use serde::{Deserialize, Serialize};

/// A page of results.
///
/// Pages are 1-indexed. `page` is the page actually returned after clamping,
/// which may differ from the one requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub items: Vec<T>,
    /// The total number of items across all pages.
    pub total: usize,
    /// The current page number (1-indexed).
    pub page: i64,
    /// The number of items per page.
    pub page_size: usize,
    /// The total number of pages (0 when there are no items).
    pub total_pages: usize,
}

/// Total number of pages for `total` items, 0 when there are no items.
#[must_use]
pub const fn total_pages(total: usize, page_size: usize) -> usize {
    if total == 0 || page_size == 0 {
        0
    } else {
        total.div_ceil(page_size)
    }
}

/// Slices `records` into the requested page.
///
/// The page is clamped into `[1, total_pages]`; when there are no pages at
/// all it is only raised to 1 and the slice is empty.
#[must_use]
pub fn paginate<T>(records: Vec<T>, page: i64, page_size: usize) -> Page<T> {
    let total = records.len();
    let total_pages = total_pages(total, page_size);

    let mut page = page.max(1);
    if total_pages > 0 {
        page = page.min(i64::try_from(total_pages).unwrap_or(i64::MAX));
    }

    let offset = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(page_size);
    let items = records.into_iter().skip(offset).take(page_size).collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn test_first_page() {
        let page = paginate(range(12), 1, 5);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_truncated() {
        let page = paginate(range(12), 3, 5);
        assert_eq!(page.items, vec![11, 12]);
        assert_eq!(page.page, 3);
    }

    #[test]
    fn test_page_above_range_is_clamped() {
        let page = paginate(range(12), 99, 5);
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![11, 12]);
    }

    #[test]
    fn test_page_below_one_is_clamped() {
        let page = paginate(range(12), -3, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<u32>::new(), 4, 10);
        assert_eq!(page.page, 4);
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.items.is_empty());

        let page = paginate(Vec::<u32>::new(), 0, 10);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_item_count_matches_formula() {
        for total in [0_u32, 1, 4, 5, 6, 19, 20, 21, 57] {
            for size in [5_usize, 10, 20] {
                let pages = total_pages(total as usize, size);
                assert_eq!(pages, (total as usize).div_ceil(size));
                for page in 1..=pages.max(1) {
                    let result = paginate(range(total), page as i64, size);
                    let start = (page - 1) * size;
                    let expected = size.min((total as usize).saturating_sub(start));
                    assert_eq!(result.items.len(), expected, "total={total} size={size} page={page}");
                }
            }
        }
    }
}
