//! Client-side list state: pagination controllers and the list screen driver.
//!
//! Everything here is synchronous and owned by one list screen. The only
//! async step is the search call a [`list_page::ListPage`] makes with the
//! ticket it issued.

pub mod filtered;
pub mod list_page;
pub mod pagination;

use pagination::PaginationState;

/// Navigation actions a pagination control can invoke.
///
/// Implemented by both controllers so the same view can drive either.
pub trait PaginationActions {
    fn pagination_state(&self) -> PaginationState;
    fn go_to_page(&mut self, page_number: i64);
    fn change_page_size(&mut self, page_size: i64);
    fn next_page(&mut self);
    fn previous_page(&mut self);
    fn go_to_first_page(&mut self);
    fn go_to_last_page(&mut self);
}
