use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SearchResultsSummary(
    #[prop(into)] query: Signal<String>,
    #[prop(into)] total_count: Signal<u64>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="search-results-summary" style="padding: 24px 24px 0 24px;">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <p style="color: #4B5563; margin: 0;">
                    "About " <strong>{move || total_count.get()}</strong>
                    " Trademarks found for " <strong>{move || format!("\"{}\"", query.get())}</strong>
                </p>
                <Show when=move || loading.get()>
                    <Spinner />
                </Show>
            </Flex>
            <hr style="border: none; border-top: 1px solid #E7E6E6; margin-top: 8px;" />
        </div>
    }
}
