//! Filter-aware pagination: local edits versus committed searches.
//!
//! Typing into the search box or picking a filter only edits local state.
//! The [`SearchTrigger`] moves when the user commits a search, changes
//! page, size or sort, or clears filters, and a list screen fetches exactly
//! when it sees the trigger move.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::pagination::{
    calculate_pagination_metadata, is_active_filter_value, normalize_pagination, PagedResult, PaginationType, SearchParams,
    SortDirection,
};
use crate::state::pagination::PaginationState;
use crate::state::PaginationActions;

/// Monotonic counter; each increment asks for a new server query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct SearchTrigger(u64);

impl SearchTrigger {
    pub fn value(self) -> u64 {
        self.0
    }

    fn fire(&mut self) -> SearchTrigger {
        self.0 += 1;
        *self
    }
}

/// Uncommitted search box text and filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_term: String,
    pub filter_values: BTreeMap<String, String>,
}

impl FilterState {
    /// Filter entries that actually constrain results.
    pub fn active_filters(&self) -> BTreeMap<String, String> {
        self.filter_values
            .iter()
            .filter(|(_, value)| is_active_filter_value(value))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.trim().is_empty()
            || self
                .filter_values
                .values()
                .any(|value| is_active_filter_value(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub sort_by: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone)]
pub struct FilteredPagination {
    pagination_type: PaginationType,
    current_page: i64,
    page_size: i64,
    total_pages: i64,
    total_records: i64,
    has_next_page: bool,
    has_previous_page: bool,
    filters: FilterState,
    sort: Option<SortState>,
    search_trigger: SearchTrigger,
}

impl FilteredPagination {
    pub fn new(pagination_type: PaginationType) -> Self {
        Self::with_page_size(pagination_type, None)
    }

    pub fn with_page_size(pagination_type: PaginationType, page_size: Option<i64>) -> Self {
        let page = normalize_pagination(None, page_size, pagination_type);
        Self {
            pagination_type,
            current_page: page.page_number,
            page_size: page.page_size,
            total_pages: 0,
            total_records: 0,
            has_next_page: false,
            has_previous_page: false,
            filters: FilterState::default(),
            sort: None,
            search_trigger: SearchTrigger::default(),
        }
    }

    pub fn pagination_type(&self) -> PaginationType {
        self.pagination_type
    }

    pub fn current_page(&self) -> i64 {
        self.current_page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    pub fn total_records(&self) -> i64 {
        self.total_records
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn search_trigger(&self) -> SearchTrigger {
        self.search_trigger
    }

    /// Fire the initial trigger that populates a freshly mounted list.
    ///
    /// Mounting twice does not fire twice.
    pub fn mount(&mut self) -> SearchTrigger {
        if self.search_trigger == SearchTrigger::default() {
            self.search_trigger.fire();
        }
        self.search_trigger
    }

    /// Edit the search box text. Never triggers a fetch.
    pub fn handle_search_term_change(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
    }

    /// Move to a page locally and ask for it. The next/previous flags follow
    /// the last known total until the server answers.
    fn move_to(&mut self, page_number: i64) -> SearchTrigger {
        self.current_page = page_number.max(1);
        let meta =
            calculate_pagination_metadata(self.total_records, self.current_page, self.page_size);
        self.has_next_page = meta.has_next_page;
        self.has_previous_page = meta.has_previous_page;
        self.search_trigger.fire()
    }

    /// Commit the current search term and filters, starting from page one.
    pub fn handle_search(&mut self) -> SearchTrigger {
        self.move_to(1)
    }

    pub fn handle_page_change(&mut self, page_number: i64) -> SearchTrigger {
        self.move_to(page_number)
    }

    /// Change size (normalized into the profile's range) and go back to page one.
    pub fn handle_page_size_change(&mut self, page_size: i64) -> SearchTrigger {
        let page = normalize_pagination(Some(1), Some(page_size), self.pagination_type);
        self.page_size = page.page_size;
        self.total_pages =
            calculate_pagination_metadata(self.total_records, 1, self.page_size).total_pages;
        self.move_to(page.page_number)
    }

    /// Select a filter value. Never triggers a fetch on its own.
    pub fn handle_filter_change(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.filter_values.insert(key.into(), value.into());
    }

    /// Clearing is itself a search: filters reset and a fetch is requested.
    pub fn handle_clear_filters(&mut self) -> SearchTrigger {
        self.filters = FilterState::default();
        self.move_to(1)
    }

    pub fn handle_sort_change(
        &mut self,
        sort_by: impl Into<String>,
        direction: SortDirection,
    ) -> SearchTrigger {
        self.sort = Some(SortState {
            sort_by: sort_by.into(),
            direction,
        });
        self.move_to(1)
    }

    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active_filters()
    }

    /// Outbound query for the current page, term, sort and active filters.
    pub fn search_params(&self) -> SearchParams {
        let term = self.filters.search_term.trim();
        SearchParams {
            page_number: self.current_page,
            page_size: self.page_size,
            search_term: (!term.is_empty()).then(|| term.to_string()),
            sort_by: self.sort.as_ref().map(|s| s.sort_by.clone()),
            sort_direction: self.sort.as_ref().map(|s| s.direction),
            filters: self.filters.active_filters(),
        }
    }

    /// Copy the server's pagination fields verbatim.
    pub fn update_pagination_data<T>(&mut self, response: &PagedResult<T>) {
        self.current_page = response.page_number;
        self.page_size = response.page_size;
        self.total_pages = response.total_pages;
        self.total_records = response.total_records;
        self.has_next_page = response.has_next_page;
        self.has_previous_page = response.has_previous_page;
    }

    /// Fall back to an empty first page after a failed fetch.
    pub fn reset_after_error(&mut self) {
        self.current_page = 1;
        self.total_pages = 0;
        self.total_records = 0;
        self.has_next_page = false;
        self.has_previous_page = false;
    }
}

impl PaginationActions for FilteredPagination {
    fn pagination_state(&self) -> PaginationState {
        PaginationState {
            page_number: self.current_page,
            page_size: self.page_size,
            total_records: self.total_records,
            total_pages: self.total_pages,
            has_next_page: self.has_next_page,
            has_previous_page: self.has_previous_page,
            is_loading: false,
        }
    }

    fn go_to_page(&mut self, page_number: i64) {
        self.handle_page_change(page_number);
    }

    fn change_page_size(&mut self, page_size: i64) {
        self.handle_page_size_change(page_size);
    }

    fn next_page(&mut self) {
        if self.has_next_page {
            self.handle_page_change(self.current_page.saturating_add(1));
        }
    }

    fn previous_page(&mut self) {
        if self.has_previous_page {
            self.handle_page_change(self.current_page - 1);
        }
    }

    fn go_to_first_page(&mut self) {
        self.handle_page_change(1);
    }

    fn go_to_last_page(&mut self) {
        if self.total_pages >= 1 {
            self.handle_page_change(self.total_pages);
        }
    }
}
