//! События страницы поиска и единая функция перехода состояния.

use super::error::SearchError;
use super::response::SearchResponse;
use super::share_link::ShareParams;
use super::status::StatusFilter;
use super::view_state::{toggled_filter, PendingSearch, RequestTicket, ViewMode, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// Page loaded with parameters recovered from the URL
    Restored(ShareParams),
    QuerySubmitted(String),
    SuggestionClicked(String),
    PageClicked(u32),
    /// `None` is the "All" button
    FilterClicked(Option<StatusFilter>),
    ShareClicked,
    ViewModeSelected(ViewMode),
    SearchCompleted {
        ticket: RequestTicket,
        response: SearchResponse,
    },
    SearchFailed {
        ticket: RequestTicket,
        error: SearchError,
    },
}

/// Side effect the controller has to run after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    None,
    Search(PendingSearch),
    Share,
}

pub fn reduce(state: ViewState, event: SearchEvent) -> (ViewState, Command) {
    match event {
        SearchEvent::Restored(params) => {
            let state = state
                .apply_new_query(&params.query)
                .apply_filter(params.status)
                .restore_page(params.page);
            search(state)
        }
        SearchEvent::QuerySubmitted(query) | SearchEvent::SuggestionClicked(query) => {
            if query.trim().is_empty() {
                return (state, Command::None);
            }
            search(state.apply_new_query(&query))
        }
        SearchEvent::PageClicked(page) => search(state.apply_page(page)),
        SearchEvent::FilterClicked(clicked) => {
            let next = toggled_filter(state.status_filter.as_ref(), clicked);
            search(state.apply_filter(next))
        }
        SearchEvent::ShareClicked => (state, Command::Share),
        SearchEvent::ViewModeSelected(mode) => (state.apply_view_mode(mode), Command::None),
        SearchEvent::SearchCompleted { ticket, response } => {
            (state.complete_search(ticket, response), Command::None)
        }
        SearchEvent::SearchFailed { ticket, error } => {
            log::error!("Error fetching trademarks: {}", error);
            (state.fail_search(ticket), Command::None)
        }
    }
}

/// Issues a search for the current state. Without a query the state change
/// stands but nothing is sent.
fn search(state: ViewState) -> (ViewState, Command) {
    if state.query.is_empty() {
        return (state, Command::None);
    }
    let (state, pending) = state.begin_search();
    (state, Command::Search(pending))
}
