//! Catalog pagination
//!
//! Slices the commit type catalog into fixed-size pages and tracks
//! the highlighted entry within the visible page. Everything here is
//! a pure function over indices owned by the caller.

use crate::catalog::CategoryItem;

/// Items shown per page unless overridden on the command line
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// Number of pages needed to show `len` items, never less than one
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    len.div_ceil(page_size).max(1)
}

/// The items on page `page`
///
/// Returns an empty slice for pages past the end of the catalog.
pub fn items_for_page(catalog: &[CategoryItem], page: usize, page_size: usize) -> &[CategoryItem] {
    let page_size = page_size.max(1);
    let start = page.saturating_mul(page_size);
    if start >= catalog.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(catalog.len());
    &catalog[start..end]
}

/// Next page index, wrapping back to the first page
pub fn advance_page(page: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (page + 1) % total
}

/// The highlighted item on the current page, if any
pub fn selected_item(page_items: &[CategoryItem], highlight: usize) -> Option<&CategoryItem> {
    page_items.get(highlight)
}

/// Move the highlight by `delta`, clamped to the page
pub fn move_highlight(highlight: usize, delta: isize, page_len: usize) -> usize {
    if page_len == 0 {
        return 0;
    }
    highlight
        .saturating_add_signed(delta)
        .min(page_len - 1)
}

/// Highlight the last item on the page
pub fn last_highlight(page_len: usize) -> usize {
    page_len.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use proptest::prelude::*;

    fn catalog_of(n: usize) -> Vec<CategoryItem> {
        (0..n)
            .map(|i| CategoryItem {
                label: CATALOG[i % CATALOG.len()].label,
                description: "",
            })
            .collect()
    }

    #[test]
    fn test_default_catalog_has_two_pages() {
        assert_eq!(total_pages(CATALOG.len(), DEFAULT_PAGE_SIZE), 2);
        assert_eq!(items_for_page(CATALOG, 0, 4)[0].label, "📦feat");
        assert_eq!(items_for_page(CATALOG, 1, 4)[0].label, "🧹refactor");
        assert_eq!(items_for_page(CATALOG, 1, 4).len(), 4);
    }

    #[test]
    fn test_empty_catalog() {
        assert_eq!(total_pages(0, 4), 1);
        assert!(items_for_page(&[], 0, 4).is_empty());
        assert_eq!(selected_item(&[], 0), None);
        assert_eq!(move_highlight(0, 1, 0), 0);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        assert!(items_for_page(CATALOG, 2, 4).is_empty());
        assert!(items_for_page(CATALOG, usize::MAX, 4).is_empty());
    }

    #[test]
    fn test_advance_page_wraps() {
        assert_eq!(advance_page(0, 2), 1);
        assert_eq!(advance_page(1, 2), 0);
        assert_eq!(advance_page(0, 1), 0);
        assert_eq!(advance_page(3, 0), 0);
    }

    #[test]
    fn test_move_highlight_clamps() {
        assert_eq!(move_highlight(0, -1, 4), 0);
        assert_eq!(move_highlight(3, 1, 4), 3);
        assert_eq!(move_highlight(1, 1, 4), 2);
        assert_eq!(move_highlight(3, 1, 2), 1);
        assert_eq!(last_highlight(4), 3);
    }

    #[test]
    fn test_selected_item() {
        let page = items_for_page(CATALOG, 0, 4);
        assert_eq!(selected_item(page, 1).map(|item| item.label), Some("🔨fix"));
        assert_eq!(selected_item(page, 4), None);
    }

    proptest! {
        /// Page count is the ceiling of len / size.
        #[test]
        fn total_pages_is_ceiling(n in 0usize..200, p in 1usize..20) {
            let expected = if n == 0 { 1 } else { (n + p - 1) / p };
            prop_assert_eq!(total_pages(n, p), expected);
        }

        /// Advancing once per page returns to the starting page.
        #[test]
        fn advance_page_is_cyclic(n in 0usize..200, p in 1usize..20, seed in 0usize..1000) {
            let total = total_pages(n, p);
            let start = seed % total;
            let mut page = start;
            for _ in 0..total {
                page = advance_page(page, total);
                prop_assert!(page < total);
            }
            prop_assert_eq!(page, start);
        }

        /// Pages are bounded and concatenate back to the catalog.
        #[test]
        fn pages_partition_catalog(n in 0usize..200, p in 1usize..20) {
            let catalog = catalog_of(n);
            let mut rebuilt = Vec::new();
            for page in 0..total_pages(n, p) {
                let items = items_for_page(&catalog, page, p);
                prop_assert!(items.len() <= p);
                rebuilt.extend_from_slice(items);
            }
            prop_assert_eq!(rebuilt, catalog);
        }
    }
}
