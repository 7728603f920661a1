//! Render model for the pagination control.
//!
//! [`PaginationView::build`] is a pure function of the pagination state and
//! display options. Events coming back from the rendered control go through
//! [`PaginationView::dispatch`], which drops events for disabled controls.

use serde::Serialize;

use crate::models::pagination::PaginationType;
use crate::state::pagination::PaginationState;
use crate::state::PaginationActions;

/// Pages shown on each side of the current page by default.
pub const DEFAULT_SIBLING_COUNT: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_page_size_selector: bool,
    pub show_info: bool,
    pub show_first_last: bool,
    pub sibling_count: i64,
    pub page_size_options: Vec<i64>,
}

impl DisplayOptions {
    pub fn for_type(pagination_type: PaginationType) -> Self {
        Self {
            show_page_size_selector: true,
            show_info: true,
            show_first_last: true,
            sibling_count: DEFAULT_SIBLING_COUNT,
            page_size_options: pagination_type.page_size_options().to_vec(),
        }
    }

    pub fn without_page_size_selector(mut self) -> Self {
        self.show_page_size_selector = false;
        self
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::for_type(PaginationType::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageItem {
    #[serde(rename_all = "camelCase")]
    Page { number: i64, is_current: bool },
    Ellipsis,
}

impl PageItem {
    pub fn number(&self) -> Option<i64> {
        match self {
            Self::Page { number, .. } => Some(*number),
            Self::Ellipsis => None,
        }
    }
}

/// First page, last page and `siblings` pages around `current`, with an
/// ellipsis wherever consecutive shown pages are more than one apart.
pub fn visible_pages(current: i64, total_pages: i64, siblings: i64) -> Vec<PageItem> {
    if total_pages < 1 {
        return Vec::new();
    }
    let current = current.clamp(1, total_pages);
    let siblings = siblings.max(0);

    let mut numbers = vec![1];
    let start = (current - siblings).max(2);
    let end = (current + siblings).min(total_pages - 1);
    numbers.extend(start..=end);
    if total_pages > 1 {
        numbers.push(total_pages);
    }

    let mut items = Vec::with_capacity(numbers.len() + 2);
    let mut previous: Option<i64> = None;
    for number in numbers {
        if let Some(prev) = previous {
            if number - prev > 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page {
            number,
            is_current: number == current,
        });
        previous = Some(number);
    }
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub visible: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSizeSelector {
    pub options: Vec<i64>,
    pub selected: i64,
    pub enabled: bool,
}

/// User interaction coming back from a rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationEvent {
    First,
    Previous,
    Next,
    Last,
    Page(i64),
    PageSize(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub info: Option<String>,
    pub first: ControlState,
    pub previous: ControlState,
    pub next: ControlState,
    pub last: ControlState,
    pub pages: Vec<PageItem>,
    pub page_size_selector: Option<PageSizeSelector>,
    pub current_page: i64,
    pub total_pages: i64,
    pub is_loading: bool,
}

impl PaginationView {
    /// `None` when there is a single page (or none) and no size selector.
    pub fn build(state: &PaginationState, options: &DisplayOptions) -> Option<Self> {
        if state.total_pages <= 1 && !options.show_page_size_selector {
            return None;
        }

        let idle = !state.is_loading;
        let back = idle && state.has_previous_page;
        let forward = idle && state.has_next_page;

        let page_size_selector = options.show_page_size_selector.then(|| {
            let mut sizes = options.page_size_options.clone();
            if !sizes.contains(&state.page_size) {
                sizes.push(state.page_size);
                sizes.sort_unstable();
            }
            PageSizeSelector {
                options: sizes,
                selected: state.page_size,
                enabled: idle,
            }
        });

        Some(Self {
            info: options.show_info.then(|| state.info_text()),
            first: ControlState {
                visible: options.show_first_last,
                enabled: back,
            },
            previous: ControlState {
                visible: true,
                enabled: back,
            },
            next: ControlState {
                visible: true,
                enabled: forward,
            },
            last: ControlState {
                visible: options.show_first_last,
                enabled: forward,
            },
            pages: visible_pages(state.page_number, state.total_pages, options.sibling_count),
            page_size_selector,
            current_page: state.page_number,
            total_pages: state.total_pages,
            is_loading: state.is_loading,
        })
    }

    fn accepts(&self, event: PaginationEvent) -> bool {
        match event {
            PaginationEvent::First => self.first.visible && self.first.enabled,
            PaginationEvent::Previous => self.previous.enabled,
            PaginationEvent::Next => self.next.enabled,
            PaginationEvent::Last => self.last.visible && self.last.enabled,
            PaginationEvent::Page(n) => {
                !self.is_loading && n != self.current_page && (1..=self.total_pages).contains(&n)
            }
            PaginationEvent::PageSize(size) => self
                .page_size_selector
                .as_ref()
                .is_some_and(|s| s.enabled && s.selected != size && s.options.contains(&size)),
        }
    }

    /// Forward an event to `actions`. Returns `false` if the control was disabled.
    pub fn dispatch(&self, event: PaginationEvent, actions: &mut impl PaginationActions) -> bool {
        if !self.accepts(event) {
            tracing::debug!(?event, "Ignoring event for disabled pagination control");
            return false;
        }
        match event {
            PaginationEvent::First => actions.go_to_first_page(),
            PaginationEvent::Previous => actions.previous_page(),
            PaginationEvent::Next => actions.next_page(),
            PaginationEvent::Last => actions.go_to_last_page(),
            PaginationEvent::Page(n) => actions.go_to_page(n),
            PaginationEvent::PageSize(size) => actions.change_page_size(size),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pagination::{PageParams, PagedResult};
    use crate::state::filtered::FilteredPagination;
    use crate::state::pagination::PaginationController;

    fn numbers(items: &[PageItem]) -> Vec<Option<i64>> {
        items.iter().map(PageItem::number).collect()
    }

    fn state(page_number: i64, total_records: i64, page_size: i64) -> PaginationState {
        let mut c: PaginationController<()> = PaginationController::new(PaginationType::Table);
        c.set_data(PagedResult::new(
            Vec::new(),
            total_records,
            PageParams {
                page_number,
                page_size,
            },
        ));
        c.state().clone()
    }

    #[test]
    fn window_around_middle_page() {
        let items = visible_pages(5, 10, 2);
        assert_eq!(
            numbers(&items),
            vec![
                Some(1),
                None,
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                None,
                Some(10)
            ]
        );
        assert_eq!(
            items[4],
            PageItem::Page {
                number: 5,
                is_current: true
            }
        );
    }

    #[test]
    fn window_near_edges() {
        assert_eq!(
            numbers(&visible_pages(1, 10, 2)),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            numbers(&visible_pages(10, 10, 2)),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            numbers(&visible_pages(4, 10, 2)),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), None, Some(10)]
        );
    }

    #[test]
    fn window_small_totals() {
        assert!(visible_pages(1, 0, 2).is_empty());
        assert_eq!(numbers(&visible_pages(1, 1, 2)), vec![Some(1)]);
        assert_eq!(numbers(&visible_pages(2, 3, 2)), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn single_page_without_selector_renders_nothing() {
        let options = DisplayOptions::for_type(PaginationType::Table).without_page_size_selector();
        assert!(PaginationView::build(&state(1, 5, 25), &options).is_none());

        let with_selector = DisplayOptions::for_type(PaginationType::Table);
        let view = PaginationView::build(&state(1, 5, 25), &with_selector).unwrap();
        assert_eq!(view.info.as_deref(), Some("Showing 1 to 5 of 5 records"));
        assert!(!view.next.enabled);
    }

    #[test]
    fn empty_list_info() {
        let view = PaginationView::build(&state(1, 0, 25), &DisplayOptions::default()).unwrap();
        assert_eq!(view.info.as_deref(), Some("No records found"));
        assert!(view.pages.is_empty());
    }

    #[test]
    fn loading_disables_everything() {
        let mut s = state(2, 100, 25);
        s.is_loading = true;
        let view = PaginationView::build(&s, &DisplayOptions::default()).unwrap();
        assert!(!view.first.enabled && !view.previous.enabled);
        assert!(!view.next.enabled && !view.last.enabled);
        assert!(!view.page_size_selector.unwrap().enabled);
    }

    #[test]
    fn selector_includes_current_odd_size() {
        let view = PaginationView::build(
            &state(1, 100, 30),
            &DisplayOptions::for_type(PaginationType::Table),
        )
        .unwrap();
        let selector = view.page_size_selector.unwrap();
        assert_eq!(selector.options, vec![10, 25, 30, 50, 100, 200]);
        assert_eq!(selector.selected, 30);
    }

    #[test]
    fn dispatch_drives_controller() {
        let mut c: PaginationController<()> = PaginationController::new(PaginationType::Table);
        c.set_data(PagedResult::new(
            Vec::new(),
            100,
            PageParams {
                page_number: 1,
                page_size: 25,
            },
        ));
        let options = DisplayOptions::for_type(PaginationType::Table);

        let view = PaginationView::build(c.state(), &options).unwrap();
        assert!(!view.dispatch(PaginationEvent::Previous, &mut c));
        assert!(view.dispatch(PaginationEvent::Last, &mut c));
        assert_eq!(c.state().page_number, 4);

        let view = PaginationView::build(c.state(), &options).unwrap();
        assert!(!view.dispatch(PaginationEvent::Page(9), &mut c));
        assert!(view.dispatch(PaginationEvent::Page(2), &mut c));
        assert_eq!(c.state().page_number, 2);

        let view = PaginationView::build(c.state(), &options).unwrap();
        assert!(!view.dispatch(PaginationEvent::PageSize(33), &mut c));
        assert!(view.dispatch(PaginationEvent::PageSize(50), &mut c));
        assert_eq!(c.state().page_number, 1);
        assert_eq!(c.state().page_size, 50);
    }

    #[test]
    fn dispatch_drives_filtered_pagination() {
        let mut p = FilteredPagination::new(PaginationType::Search);
        p.update_pagination_data(&PagedResult::<()>::new(
            Vec::new(),
            95,
            PageParams {
                page_number: 1,
                page_size: 20,
            },
        ));
        let view = PaginationView::build(&p.pagination_state(), &DisplayOptions::default()).unwrap();
        assert!(view.dispatch(PaginationEvent::Next, &mut p));
        assert_eq!(p.current_page(), 2);
        assert_eq!(p.search_trigger().value(), 1);
    }
}
