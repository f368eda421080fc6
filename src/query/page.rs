use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    pub fn first(page_size: usize) -> Self {
        Self::new(0, page_size)
    }

    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// `[index * size, index * size + size)` clamped to `items`.
    /// Out-of-range pages are empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    pub fn page_count(&self, total: usize) -> usize {
        page_count(total, self.page_size)
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// One entry of a pager: a 1-based page number or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page numbers to show for `page_index` out of `page_count` pages.
///
/// Up to seven pages are listed in full; beyond that the first and last
/// pages stay visible and the rest collapse around the current one.
pub fn page_links(page_index: usize, page_count: usize) -> Vec<PageLink> {
    use PageLink::{Ellipsis, Page};

    if page_count <= 7 {
        return (1..=page_count).map(Page).collect();
    }

    let current = page_index.saturating_add(1);
    let last = page_count;

    if current <= 3 {
        return vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(last - 1), Page(last)];
    }

    if current >= last - 2 {
        return vec![
            Page(1),
            Page(2),
            Ellipsis,
            Page(last - 3),
            Page(last - 2),
            Page(last - 1),
            Page(last),
        ];
    }

    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(last),
    ]
}

#[cfg(test)]
mod tests {
    use super::PageLink::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_slice_clamps_to_length() {
        let items: Vec<u32> = (0..23).collect();

        assert_eq!(Pagination::new(0, 10).slice(&items), &items[0..10]);
        assert_eq!(Pagination::new(2, 10).slice(&items), &items[20..23]);
        assert!(Pagination::new(3, 10).slice(&items).is_empty());
        assert!(Pagination::new(usize::MAX, 10).slice(&items).is_empty());
        assert!(Pagination::new(0, 0).slice(&items).is_empty());
    }

    #[test]
    fn test_pages_reassemble_collection() {
        let items: Vec<u32> = (0..37).collect();
        let size = 10;
        let pages = page_count(items.len(), size);
        assert_eq!(pages, 4);

        let rebuilt: Vec<u32> = (0..pages)
            .flat_map(|index| Pagination::new(index, size).slice(&items).to_vec())
            .collect();
        assert_eq!(rebuilt, items);
    }

    #[test]
    fn test_page_count_edges() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_short_pager_lists_every_page() {
        assert_eq!(page_links(0, 0), vec![]);
        assert_eq!(page_links(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(page_links(0, 7).len(), 7);
    }

    #[test]
    fn test_pager_near_start() {
        assert_eq!(
            page_links(1, 20),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(19), Page(20)]
        );
    }

    #[test]
    fn test_pager_near_end() {
        assert_eq!(
            page_links(18, 20),
            vec![Page(1), Page(2), Ellipsis, Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn test_pager_in_middle() {
        assert_eq!(
            page_links(9, 20),
            vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Ellipsis, Page(20)]
        );
    }
}
