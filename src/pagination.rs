use serde::Serialize;

/// Paging metadata for one rendered page of a filtered collection.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct PagingInfo {
    /// 1-based page number.
    pub current_page: usize,
    pub items_per_page: usize,
    /// Number of items matching the active filter, across all pages.
    pub total_items: usize,
    pub total_pages: usize,
}

impl PagingInfo {
    /// `items_per_page` must be positive; callers validate it beforehand.
    pub fn new(current_page: usize, items_per_page: usize, total_items: usize) -> Self {
        Self {
            current_page,
            items_per_page,
            total_items,
            total_pages: total_items.div_ceil(items_per_page),
        }
    }

    /// Number of items preceding the current page, `None` if it does not fit
    /// in `usize` (such a page lies past the end of any collection).
    pub fn offset(&self) -> Option<usize> {
        self.current_page
            .saturating_sub(1)
            .checked_mul(self.items_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(PagingInfo::new(2, 3, 5).total_pages, 2);
        assert_eq!(PagingInfo::new(1, 10, 28).total_pages, 3);
        assert_eq!(PagingInfo::new(1, 4, 8).total_pages, 2);
        assert_eq!(PagingInfo::new(1, 4, 0).total_pages, 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PagingInfo::new(1, 3, 5).offset(), Some(0));
        assert_eq!(PagingInfo::new(2, 3, 5).offset(), Some(3));
        assert_eq!(PagingInfo::new(5, 4, 5).offset(), Some(16));
    }

    #[test]
    fn offset_overflow_is_none() {
        assert_eq!(PagingInfo::new(usize::MAX, 3, 5).offset(), None);
        let half = usize::MAX / 2 + 2;
        assert_eq!(PagingInfo::new(half, 2, 5).offset(), None);
    }
}
