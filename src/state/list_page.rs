//! Fetch lifecycle of one list screen.
//!
//! `Idle -> FetchPending -> FetchSuccess | FetchError`, re-entered on every
//! trigger. A response is applied only when it answers the latest trigger,
//! so a slow stale response can never overwrite newer state.

use crate::errors::AppError;
use crate::models::pagination::{PagedResult, PaginationType, SearchParams};
use crate::services::search::SearchApi;
use crate::state::filtered::{FilteredPagination, SearchTrigger};
use crate::state::pagination::PaginationState;
use crate::state::PaginationActions;
use crate::views::pagination::{DisplayOptions, PaginationView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Pending { trigger: SearchTrigger },
    Success,
    Error { message: String },
}

/// One issued fetch: the trigger it answers and the query to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub trigger: SearchTrigger,
    pub params: SearchParams,
}

#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pagination: FilteredPagination,
    items: Vec<T>,
    phase: FetchPhase,
    last_issued: Option<SearchTrigger>,
}

impl<T> ListPage<T> {
    pub fn new(pagination_type: PaginationType) -> Self {
        Self {
            pagination: FilteredPagination::new(pagination_type),
            items: Vec::new(),
            phase: FetchPhase::Idle,
            last_issued: None,
        }
    }

    pub fn pagination(&self) -> &FilteredPagination {
        &self.pagination
    }

    /// Mutable access for event handlers (search box, filters, pager).
    pub fn pagination_mut(&mut self) -> &mut FilteredPagination {
        &mut self.pagination
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Pending { .. })
    }

    /// Fire the mount-time trigger and issue the first fetch.
    pub fn mount(&mut self) -> Option<FetchTicket> {
        self.pagination.mount();
        self.begin_fetch()
    }

    /// Whether the trigger moved since the last issued fetch.
    pub fn needs_fetch(&self) -> bool {
        let current = self.pagination.search_trigger();
        current != SearchTrigger::default() && self.last_issued != Some(current)
    }

    /// Issue a ticket for the current trigger, if one is due.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if !self.needs_fetch() {
            return None;
        }
        let trigger = self.pagination.search_trigger();
        self.last_issued = Some(trigger);
        self.phase = FetchPhase::Pending { trigger };
        Some(FetchTicket {
            trigger,
            params: self.pagination.search_params(),
        })
    }

    /// Apply a search result. Returns `false` when the ticket is stale.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<PagedResult<T>, AppError>) -> bool {
        let latest = self.pagination.search_trigger();
        if ticket.trigger != latest {
            tracing::debug!(
                ticket = ticket.trigger.value(),
                latest = latest.value(),
                "Discarding stale search response"
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.pagination.update_pagination_data(&page);
                self.items = page.data;
                self.phase = FetchPhase::Success;
            }
            Err(e) => {
                tracing::warn!(error = %e, trigger = ticket.trigger.value(), "Search failed");
                self.pagination.reset_after_error();
                self.items.clear();
                self.phase = FetchPhase::Error {
                    message: e.to_string(),
                };
            }
        }
        true
    }

    /// Issue, run and apply a fetch if the trigger moved.
    pub async fn refresh(&mut self, api: &dyn SearchApi<T>) -> bool {
        let Some(ticket) = self.begin_fetch() else {
            return false;
        };
        let result = api.search(&ticket.params).await;
        self.apply(ticket, result)
    }

    pub fn pagination_state(&self) -> PaginationState {
        PaginationState {
            is_loading: self.is_loading(),
            ..self.pagination.pagination_state()
        }
    }

    pub fn pagination_view(&self, options: &DisplayOptions) -> Option<PaginationView> {
        PaginationView::build(&self.pagination_state(), options)
    }

    /// Message for an empty successful page; `None` while there is data.
    pub fn empty_message(&self) -> Option<&'static str> {
        if self.phase != FetchPhase::Success || !self.items.is_empty() {
            return None;
        }
        if self.pagination.has_active_filters() {
            Some("No records match the current filters")
        } else {
            Some("No records yet")
        }
    }
}
