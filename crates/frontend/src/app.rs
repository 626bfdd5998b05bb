use crate::search::{SearchPage, TrademarkSearchClient};
use crate::shared::config::load_search_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_search_config() {
        Ok(config) => {
            // Provide the search client to the whole app via context.
            provide_context(TrademarkSearchClient::new(&config));

            view! { <SearchPage /> }.into_any()
        }
        Err(e) => {
            log::error!("Failed to load search configuration: {}", e);
            view! {
                <div class="warning-box" style="padding: 16px; color: #b91c1c;">
                    {format!("Search is unavailable: {}", e)}
                </div>
            }
            .into_any()
        }
    }
}
