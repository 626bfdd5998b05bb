//! Состояние страницы поиска и чистые операции над ним.
//!
//! Every operation takes the state by value and returns the next state, so
//! the controller can swap it inside a signal and tests can chain calls.

use serde::{Deserialize, Serialize};

use super::pagination::{clamp_page, pagination_window, total_pages_for, PageItem};
use super::request::SearchRequest;
use super::response::{SearchResponse, TrademarkRecord};
use super::status::{StatusFilter, StatusSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

/// Generation number of an issued search; only the latest one may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// A search the controller has to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub ticket: RequestTicket,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub total_count: u64,
    pub status_filter: Option<StatusSet>,
    pub view_mode: ViewMode,
    pub results: Vec<TrademarkRecord>,
    /// Ticket of the search currently awaited, if any
    pub in_flight: Option<RequestTicket>,
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_pages: 0,
            total_count: 0,
            status_filter: None,
            view_mode: ViewMode::List,
            results: Vec::new(),
            in_flight: None,
            generation: 0,
        }
    }
}

impl ViewState {
    /// New query: page goes back to 1, filter and results stay.
    pub fn apply_new_query(mut self, query: &str) -> Self {
        self.query = query.trim().to_string();
        self.current_page = 1;
        self
    }

    pub fn apply_page(mut self, page: u32) -> Self {
        self.current_page = clamp_page(page, self.total_pages);
        self
    }

    /// `None` (or an empty set) clears the filter. Page goes back to 1.
    pub fn apply_filter(mut self, status: Option<StatusSet>) -> Self {
        self.status_filter = status.filter(|set| !set.is_empty());
        self.current_page = 1;
        self
    }

    /// Stores a response. The page requested before the fetch is kept, unless
    /// the new page count no longer reaches it.
    pub fn apply_response(mut self, response: SearchResponse) -> Self {
        self.total_count = response.total_count;
        self.total_pages = total_pages_for(response.total_count);
        self.results = response.hits;
        self.current_page = clamp_page(self.current_page, self.total_pages);
        self
    }

    pub fn apply_view_mode(mut self, mode: ViewMode) -> Self {
        self.view_mode = mode;
        self
    }

    /// Sets page without clamping. Used when restoring a shared link before
    /// the page count is known; `apply_response` clamps it afterwards.
    pub fn restore_page(mut self, page: u32) -> Self {
        self.current_page = page.max(1);
        self
    }

    /// Issues a ticket for a search of the current query/page/filter.
    pub fn begin_search(mut self) -> (Self, PendingSearch) {
        self.generation += 1;
        let ticket = RequestTicket(self.generation);
        self.in_flight = Some(ticket);

        let request = SearchRequest::build(
            &self.query,
            Some(self.current_page),
            self.status_filter.as_ref(),
        );
        (self, PendingSearch { ticket, request })
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies a response only if it belongs to the latest issued search.
    pub fn complete_search(mut self, ticket: RequestTicket, response: SearchResponse) -> Self {
        if !self.is_current(ticket) {
            log::debug!(
                "Dropping stale response #{} (latest #{})",
                ticket.0,
                self.generation
            );
            return self;
        }
        self.in_flight = None;
        self.apply_response(response)
    }

    /// A failed search leaves results untouched; only the loading marker is cleared.
    pub fn fail_search(mut self, ticket: RequestTicket) -> Self {
        if self.is_current(ticket) {
            self.in_flight = None;
        }
        self
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn suggestions(&self) -> Vec<String> {
        suggestions_for(&self.query)
    }

    pub fn page_window(&self) -> Vec<PageItem> {
        pagination_window(self.current_page, self.total_pages)
    }

    pub fn is_status_selected(&self, status: StatusFilter) -> bool {
        self.status_filter
            .as_ref()
            .is_some_and(|set| set.contains(&status))
    }
}

/// "Also try searching for" variants of a query.
pub fn suggestions_for(query: &str) -> Vec<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    vec![format!("{}*", trimmed), format!("*{}", trimmed)]
}

/// Filter after clicking a status button: `None` ("All") clears, a status
/// toggles its membership, an emptied set clears.
pub fn toggled_filter(current: Option<&StatusSet>, clicked: Option<StatusFilter>) -> Option<StatusSet> {
    let status = clicked?;
    let mut set = current.cloned().unwrap_or_default();
    if !set.remove(&status) {
        set.insert(status);
    }
    if set.is_empty() { None } else { Some(set) }
}
