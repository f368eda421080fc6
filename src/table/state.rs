use super::columns::{Column, default_columns};
use crate::core::{FieldPath, Record};
use crate::query::{
    DEFAULT_PAGE_SIZE, FilterSpec, PageLink, PageRequest, Pagination, SortDirection, SortKey,
    page_count, page_links, toggle_sort,
};

/// Interactive table state.
///
/// Columns are addressed by id; sorting and filtering use the column's
/// accessor path, so nested columns such as latitude behave like any other.
/// Changing the search or any filter jumps back to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    columns: Vec<Column>,
    pagination: Pagination,
    sort: Option<SortKey>,
    filters: FilterSpec,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            columns: default_columns(),
            pagination: Pagination::first(page_size),
            sort: None,
            filters: FilterSpec::default(),
        }
    }

    pub fn with_columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    // ------------------------------------------------------------------
    // Columns
    // ------------------------------------------------------------------

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.visible)
    }

    /// Returns `false` when no column has that id.
    pub fn toggle_column_visibility(&mut self, id: &str) -> bool {
        match self.columns.iter_mut().find(|column| column.id == id) {
            Some(column) => {
                column.visible = !column.visible;
                true
            }
            None => false,
        }
    }

    /// Rendered cell for `column_id`; empty when the value is absent.
    pub fn cell_text(&self, record: &Record, column_id: &str) -> String {
        match self.column(column_id) {
            Some(column) => column.cell_text(record),
            None => record.text(&FieldPath::parse(column_id)).unwrap_or_default(),
        }
    }

    /// Unknown ids are taken as field paths.
    fn accessor<'a>(&'a self, column_id: &'a str) -> &'a str {
        self.column(column_id)
            .map(|column| column.accessor.as_str())
            .unwrap_or(column_id)
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// Cycle the column through ascending, descending and unsorted.
    pub fn toggle_sort(&mut self, column_id: &str) -> Option<&SortKey> {
        let accessor = self.accessor(column_id).to_string();
        self.sort = toggle_sort(self.sort.as_ref(), &accessor);
        self.sort.as_ref()
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    pub fn sort(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    /// Direction indicator for a column header.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        let accessor = self.accessor(column_id);
        self.sort
            .as_ref()
            .filter(|key| key.field.as_str() == accessor)
            .map(|key| key.direction)
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn search(&self) -> &str {
        &self.filters.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
        self.pagination.page_index = 0;
    }

    pub fn filter_value(&self, column_id: &str) -> Option<&str> {
        self.filters.get(self.accessor(column_id))
    }

    pub fn apply_column_filter(&mut self, column_id: &str, value: impl Into<String>) {
        let accessor = self.accessor(column_id).to_string();
        self.filters.set(accessor, value);
        self.pagination.page_index = 0;
    }

    pub fn clear_column_filter(&mut self, column_id: &str) {
        let accessor = self.accessor(column_id).to_string();
        self.filters.clear(&accessor);
        self.pagination.page_index = 0;
    }

    /// Drop the search term and every column filter.
    pub fn clear_all_filters(&mut self) {
        self.filters = FilterSpec::default();
        self.pagination.page_index = 0;
    }

    /// Column filters in effect, not counting the search term.
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_columns().count()
    }

    // ------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination = Pagination::first(page_size);
    }

    /// Jump to `page_index`, clamped to the last page for `total_count`.
    pub fn set_page(&mut self, page_index: usize, total_count: usize) {
        let last = self.page_count(total_count).saturating_sub(1);
        self.pagination.page_index = page_index.min(last);
    }

    /// Jump without clamping; pages past the end come back empty.
    pub fn jump_to(&mut self, page_index: usize) {
        self.pagination.page_index = page_index;
    }

    pub fn next_page(&mut self, total_count: usize) -> bool {
        if self.pagination.page_index.saturating_add(1) >= self.page_count(total_count) {
            return false;
        }
        self.pagination.page_index += 1;
        true
    }

    pub fn previous_page(&mut self) -> bool {
        if self.pagination.page_index == 0 {
            return false;
        }
        self.pagination.page_index -= 1;
        true
    }

    pub fn page_count(&self, total_count: usize) -> usize {
        page_count(total_count, self.pagination.page_size)
    }

    pub fn page_links(&self, total_count: usize) -> Vec<PageLink> {
        page_links(self.pagination.page_index, self.page_count(total_count))
    }

    /// Request for the page currently on screen.
    pub fn request(&self) -> PageRequest {
        PageRequest {
            pagination: self.pagination,
            sort: self.sort.clone(),
            filters: self.filters.clone(),
        }
    }
}
