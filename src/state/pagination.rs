//! Local pagination state with validated navigation actions.

use serde::Serialize;

use crate::models::pagination::{
    calculate_pagination_metadata, format_pagination_info, normalize_pagination,
    validate_pagination, PagedResult, PaginationType,
};
use crate::state::PaginationActions;

/// Snapshot of where a list is and what it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page_number: i64,
    pub page_size: i64,
    pub total_records: i64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub is_loading: bool,
}

impl PaginationState {
    pub fn new(pagination_type: PaginationType, page_size: Option<i64>) -> Self {
        let page = normalize_pagination(None, page_size, pagination_type);
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            total_records: 0,
            total_pages: 0,
            has_next_page: false,
            has_previous_page: false,
            is_loading: false,
        }
    }

    /// Recompute the derived fields from totals, page and size.
    fn rederive(&mut self) {
        let meta =
            calculate_pagination_metadata(self.total_records, self.page_number, self.page_size);
        self.total_pages = meta.total_pages;
        self.has_next_page = meta.has_next_page;
        self.has_previous_page = meta.has_previous_page;
    }

    pub fn info_text(&self) -> String {
        format_pagination_info(self.total_records, self.page_number, self.page_size)
    }
}

/// Pagination state plus the page of data it describes.
#[derive(Debug, Clone)]
pub struct PaginationController<T> {
    pagination_type: PaginationType,
    state: PaginationState,
    data: Vec<T>,
}

impl<T> PaginationController<T> {
    pub fn new(pagination_type: PaginationType) -> Self {
        Self::with_page_size(pagination_type, None)
    }

    pub fn with_page_size(pagination_type: PaginationType, page_size: Option<i64>) -> Self {
        Self {
            pagination_type,
            state: PaginationState::new(pagination_type, page_size),
            data: Vec::new(),
        }
    }

    pub fn pagination_type(&self) -> PaginationType {
        self.pagination_type
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Move to `page_number`. Invalid pages are logged and ignored.
    pub fn set_page(&mut self, page_number: i64) -> bool {
        let validation = validate_pagination(page_number, self.state.page_size, self.pagination_type);
        if !validation.is_valid {
            tracing::warn!(
                page_number,
                errors = ?validation.errors,
                "Ignoring invalid page change"
            );
            return false;
        }
        self.state.page_number = page_number;
        self.state.rederive();
        true
    }

    /// Change the page size and restart at the first page.
    pub fn set_page_size(&mut self, page_size: i64) -> bool {
        let validation = validate_pagination(self.state.page_number, page_size, self.pagination_type);
        if !validation.is_valid {
            tracing::warn!(
                page_size,
                errors = ?validation.errors,
                "Ignoring invalid page size change"
            );
            return false;
        }
        self.state.page_size = page_size;
        self.state.page_number = 1;
        self.state.rederive();
        true
    }

    pub fn next_page(&mut self) {
        if self.state.has_next_page {
            self.set_page(self.state.page_number + 1);
        }
    }

    pub fn previous_page(&mut self) {
        if self.state.has_previous_page {
            self.set_page(self.state.page_number - 1);
        }
    }

    pub fn go_to_first_page(&mut self) {
        self.set_page(1);
    }

    /// Jump to the last page; a list with no pages stays where it is.
    pub fn go_to_last_page(&mut self) {
        if self.state.total_pages >= 1 {
            self.set_page(self.state.total_pages);
        }
    }

    /// Back to page one at the profile's default size, with no data.
    pub fn reset(&mut self) {
        self.state = PaginationState::new(self.pagination_type, None);
        self.data.clear();
    }

    /// Replace state and data with an authoritative server page.
    pub fn set_data(&mut self, response: PagedResult<T>) {
        let meta = calculate_pagination_metadata(
            response.total_records,
            response.page_number,
            response.page_size,
        );
        self.state = PaginationState {
            page_number: response.page_number,
            page_size: response.page_size,
            total_records: response.total_records,
            total_pages: meta.total_pages,
            has_next_page: meta.has_next_page,
            has_previous_page: meta.has_previous_page,
            is_loading: false,
        };
        self.data = response.data;
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.state.is_loading = is_loading;
    }
}

impl<T> PaginationActions for PaginationController<T> {
    fn pagination_state(&self) -> PaginationState {
        self.state.clone()
    }

    fn go_to_page(&mut self, page_number: i64) {
        self.set_page(page_number);
    }

    fn change_page_size(&mut self, page_size: i64) {
        self.set_page_size(page_size);
    }

    fn next_page(&mut self) {
        PaginationController::next_page(self);
    }

    fn previous_page(&mut self) {
        PaginationController::previous_page(self);
    }

    fn go_to_first_page(&mut self) {
        PaginationController::go_to_first_page(self);
    }

    fn go_to_last_page(&mut self) {
        PaginationController::go_to_last_page(self);
    }
}
