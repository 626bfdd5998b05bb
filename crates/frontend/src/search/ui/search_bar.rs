use crate::shared::icons::icon;
use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use thaw::*;

/// Строка поиска: Enter или кнопка отправляют запрос
#[component]
pub fn SearchBar(
    /// Query currently shown in results; the input follows it
    #[prop(into)]
    query: Signal<String>,
    /// Called with the trimmed, non-empty query
    on_search: Callback<String>,
) -> impl IntoView {
    let input_value = RwSignal::new(query.get_untracked());

    // Suggestion clicks and restored links change the query from outside
    Effect::new(move |_| {
        input_value.set(query.get());
    });

    let submit = move || {
        let text = input_value.get_untracked();
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            on_search.run(trimmed.to_string());
        }
    };

    view! {
        <header class="search-header" style="display: flex; align-items: center; gap: 12px; padding: 16px 64px; background: #F8FAFE; border-bottom: 4px solid #eaf1ff;">
            <div style="font-size: 20px; font-weight: 700; margin-right: 40px; color: #1d4ed8;">"Trademark Search"</div>
            <div style="display: flex; align-items: center; gap: 8px; width: 50%; border: 1px solid #d1d5db; border-radius: 8px; padding: 0 8px; background: white;">
                <span style="color: #6b7280; display: inline-flex;">{icon("search")}</span>
                <input
                    type="text"
                    placeholder="Search Trademark Here eg. Mickey Mouse"
                    prop:value=move || input_value.get()
                    on:input=move |ev| input_value.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                    style="border: none; outline: none; padding: 8px; width: 100%;"
                />
            </div>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| submit()>
                "Search"
            </Button>
        </header>
    }
}
