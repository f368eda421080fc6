//! Query evaluation over the in-memory collection.
//!
//! The pipeline order is fixed: free-text search, column filters, sort,
//! then the page slice. The source collection is never mutated.

pub mod filter;
pub mod options;
pub mod page;
pub mod sort;

pub use filter::{CompiledFilter, FilterSpec, SEARCH_FIELDS, SEARCH_KEY};
pub use options::{distinct_values, narrow_options};
pub use page::{DEFAULT_PAGE_SIZE, PageLink, Pagination, page_count, page_links};
pub use sort::{SortDirection, SortKey, sort_records, toggle_sort};

use crate::core::Record;

/// Filter and sort `records`; the result borrows from the input.
pub fn evaluate<'r>(
    records: &'r [Record],
    filters: &FilterSpec,
    sort: Option<&SortKey>,
) -> Vec<&'r Record> {
    let filter = filters.compile();

    let mut matched: Vec<&Record> = if filter.is_noop() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| filter.matches_search(record))
            .filter(|record| filter.matches_columns(record))
            .collect()
    };

    sort_records(&mut matched, sort);
    matched
}

/// Number of records passing `filters`, before pagination.
pub fn count_matches(records: &[Record], filters: &FilterSpec) -> usize {
    let filter = filters.compile();
    if filter.is_noop() {
        return records.len();
    }
    records.iter().filter(|record| filter.matches(record)).count()
}

/// Everything needed to fetch one page of the table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub pagination: Pagination,
    pub sort: Option<SortKey>,
    pub filters: FilterSpec,
}

impl PageRequest {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            ..Self::default()
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_filters(mut self, filters: FilterSpec) -> Self {
        self.filters = filters;
        self
    }
}

/// One page plus the totals needed for pager math.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    pub records: Vec<Record>,
    pub total_count: usize,
    pub page_count: usize,
    pub pagination: Pagination,
}

impl PageResult {
    pub fn is_last_page(&self) -> bool {
        self.pagination.page_index.saturating_add(1) >= self.page_count
    }
}

/// Run the whole pipeline and copy out only the requested page.
pub fn execute(records: &[Record], request: &PageRequest) -> PageResult {
    let matched = evaluate(records, &request.filters, request.sort.as_ref());
    let total_count = matched.len();
    let page = request
        .pagination
        .slice(&matched)
        .iter()
        .map(|record| (*record).clone())
        .collect();

    PageResult {
        records: page,
        total_count,
        page_count: request.pagination.page_count(total_count),
        pagination: request.pagination,
    }
}
