//! The paginated envelope returned by list operations.

use serde::{Deserialize, Serialize};

/// One page of a list, with counts over the whole result set.
///
/// `total_pages` is `ceil(total_items / page_size)`, so an empty list has zero
/// pages. A page past the end is not clamped: it yields no items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResults<T> {
    /// The requested page, 1-based.
    pub page: usize,
    /// Number of pages in the full result set.
    pub total_pages: usize,
    /// Number of items in the full result set.
    pub total_items: usize,
    /// Items on this page.
    pub items: Vec<T>,
}

impl<T> PaginatedResults<T> {
    /// Slices `all` to `page` (1-based) of `page_size` items.
    ///
    /// A `page_size` of zero is treated as one. Page zero is treated as the
    /// first page; callers validate the page beforehand.
    ///
    /// # Examples
    ///
    /// ```
    /// use leafy_admin::PaginatedResults;
    ///
    /// let page = PaginatedResults::paginate((1..=25).collect(), 3, 10);
    /// assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    /// assert_eq!(page.total_pages, 3);
    /// assert_eq!(page.total_items, 25);
    /// ```
    pub fn paginate(all: Vec<T>, page: usize, page_size: usize) -> Self {
        let total_items = all.len();
        let page_size = page_size.max(1);
        let page = page.max(1);
        let total_pages = total_items.div_ceil(page_size);

        let start = (page - 1).saturating_mul(page_size);
        let items = if start < total_items {
            all.into_iter().skip(start).take(page_size).collect()
        } else {
            Vec::new()
        };

        Self {
            page,
            total_pages,
            total_items,
            items,
        }
    }

    /// Maps every item on the page, keeping the counts.
    pub fn map<U, F>(self, f: F) -> PaginatedResults<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResults {
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Like [`map`](Self::map), stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(self, f: F) -> Result<PaginatedResults<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(PaginatedResults {
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
        })
    }

    /// Returns `true` if there is a page after this one.
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns `true` if there is a page before this one.
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counts_match_formula() {
        for total in 0..=35_usize {
            for page in 1..=5_usize {
                let result = PaginatedResults::paginate((0..total).collect(), page, 10);
                assert_eq!(result.total_pages, total.div_ceil(10), "N={total}");
                assert_eq!(result.total_items, total);
                let expected = total.saturating_sub(10 * (page - 1)).min(10);
                assert_eq!(result.items.len(), expected, "N={total} p={page}");
            }
        }
    }

    #[test]
    fn test_slice_keeps_order() {
        let result = PaginatedResults::paginate((1..=25).collect(), 2, 10);
        assert_eq!(result.items, (11..=20).collect::<Vec<_>>());
        assert!(result.has_next());
        assert!(result.has_previous());
    }

    #[test]
    fn test_page_past_end_is_empty_not_clamped() {
        let result = PaginatedResults::paginate(vec![1, 2, 3], 7, 10);
        assert_eq!(result.page, 7);
        assert_eq!(result.total_pages, 1);
        assert!(result.items.is_empty());
        assert!(!result.has_next());
    }

    #[test]
    fn test_empty_list_has_zero_pages() {
        let result: PaginatedResults<u8> = PaginatedResults::paginate(Vec::new(), 1, 10);
        assert_eq!(result.total_pages, 0);
        assert!(result.items.is_empty());
        assert!(!result.has_previous());
    }

    #[test]
    fn test_zero_page_size_treated_as_one() {
        let result = PaginatedResults::paginate(vec!['a', 'b'], 2, 0);
        assert_eq!(result.items, vec!['b']);
        assert_eq!(result.total_pages, 2);
    }

    #[test]
    fn test_map_keeps_counts() {
        let result = PaginatedResults::paginate(vec![1, 2, 3], 1, 2).map(|n| n * 10);
        assert_eq!(result.items, vec![10, 20]);
        assert_eq!(result.total_items, 3);

        let failed: Result<PaginatedResults<i32>, &str> =
            PaginatedResults::paginate(vec![1, 2], 1, 2).try_map(|_| Err("nope"));
        assert_eq!(failed.unwrap_err(), "nope");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(PaginatedResults::paginate(vec![1], 1, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"page": 1, "total_pages": 1, "total_items": 1, "items": [1]})
        );
    }
}
