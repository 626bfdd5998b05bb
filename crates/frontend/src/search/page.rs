//! Страница поиска: контроллер событий и компоновка компонентов.
//!
//! All state changes go through `contracts::search::reduce`; this module only
//! runs the returned commands (HTTP search, share link) and renders.

use super::api::TrademarkSearchClient;
use super::ui::*;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::location;
use contracts::search::share_link::{self, ShareParams};
use contracts::search::{reduce, Command, SearchEvent, StatusFilter, ViewMode, ViewState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Run one event through the reducer and store the new state
fn apply(state: RwSignal<ViewState>, event: SearchEvent) -> Command {
    let mut command = Command::None;
    state.update(|current| {
        let (next, cmd) = reduce(std::mem::take(current), event);
        *current = next;
        command = cmd;
    });
    command
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let client = use_context::<TrademarkSearchClient>()
        .expect("TrademarkSearchClient context not found");

    let state = RwSignal::new(ViewState::default());
    let (link_copied, set_link_copied) = signal(false);

    let dispatch = Callback::new(move |event: SearchEvent| match apply(state, event) {
        Command::None => {}
        Command::Search(pending) => {
            let client = client.clone();
            spawn_local(async move {
                let event = match client.search(&pending.request).await {
                    Ok(response) => SearchEvent::SearchCompleted {
                        ticket: pending.ticket,
                        response,
                    },
                    Err(error) => SearchEvent::SearchFailed {
                        ticket: pending.ticket,
                        error,
                    },
                };
                apply(state, event);
            });
        }
        Command::Share => {
            let base_url = location::current_base_url();
            let (params, url) = state.with_untracked(|s| {
                (ShareParams::from(s), share_link::encode(&base_url, s))
            });
            location::replace_query(&params.to_query_string());
            set_link_copied.set(false);
            copy_to_clipboard_with_callback(&url, move || set_link_copied.set(true));
        }
    });

    // Recover query/page/status from the URL and search right away
    let restored = share_link::decode(&location::current_search());
    log::debug!("Restored from URL: {:?}", restored);
    dispatch.run(SearchEvent::Restored(restored));

    let query = Signal::derive(move || state.with(|s| s.query.clone()));
    let rows = Signal::derive(move || {
        state.with(|s| s.results.iter().map(TrademarkRow::from).collect::<Vec<_>>())
    });
    let has_results = move || state.with(|s| !s.results.is_empty());

    view! {
        <div class="search-page">
            <SearchBar
                query=query
                on_search=Callback::new(move |q: String| dispatch.run(SearchEvent::QuerySubmitted(q)))
            />

            <Show when=move || !query.get().is_empty()>
                <SearchResultsSummary
                    query=query
                    total_count=Signal::derive(move || state.with(|s| s.total_count))
                    loading=Signal::derive(move || state.with(|s| s.is_loading()))
                />
            </Show>

            <SearchSuggestions
                suggestions=Signal::derive(move || state.with(|s| s.suggestions()))
                view_mode=Signal::derive(move || state.with(|s| s.view_mode))
                link_copied=link_copied
                on_suggestion_click=Callback::new(move |s: String| dispatch.run(SearchEvent::SuggestionClicked(s)))
                on_share_click=Callback::new(move |_: ()| dispatch.run(SearchEvent::ShareClicked))
                on_view_mode=Callback::new(move |mode: ViewMode| dispatch.run(SearchEvent::ViewModeSelected(mode)))
            />

            <div class="result-list" style="display: flex; flex-direction: row; gap: 40px; padding: 24px;">
                <div style="flex: 1;">
                    {move || {
                        if !has_results() {
                            view! { <p style="color: #6b7280;">"No results found."</p> }.into_any()
                        } else if state.with(|s| s.view_mode) == ViewMode::Grid {
                            view! { <ResultGrid rows=rows /> }.into_any()
                        } else {
                            view! { <ResultList rows=rows /> }.into_any()
                        }
                    }}
                </div>
                <div style="width: 33%; display: flex; flex-direction: column; gap: 40px;">
                    <StatusFilterPanel
                        selected=Signal::derive(move || state.with(|s| s.status_filter.clone()))
                        on_filter_click=Callback::new(move |status: Option<StatusFilter>| dispatch.run(SearchEvent::FilterClicked(status)))
                    />
                </div>
            </div>

            <Show when=move || state.with(|s| s.total_pages > 0)>
                <Pager
                    items=Signal::derive(move || state.with(|s| s.page_window()))
                    current_page=Signal::derive(move || state.with(|s| s.current_page))
                    on_page_change=Callback::new(move |page: u32| dispatch.run(SearchEvent::PageClicked(page)))
                />
            </Show>
        </div>
    }
}
