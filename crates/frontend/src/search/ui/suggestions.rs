use crate::shared::icons::icon;
use contracts::search::ViewMode;
use leptos::prelude::*;
use thaw::*;

/// "Also try searching for" row with share and list/grid switches
#[component]
pub fn SearchSuggestions(
    #[prop(into)] suggestions: Signal<Vec<String>>,
    #[prop(into)] view_mode: Signal<ViewMode>,
    /// Set after the share link landed in the clipboard
    #[prop(into)]
    link_copied: Signal<bool>,
    on_suggestion_click: Callback<String>,
    on_share_click: Callback<()>,
    on_view_mode: Callback<ViewMode>,
) -> impl IntoView {
    let mode_appearance = move |mode: ViewMode| {
        if view_mode.get() == mode {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Subtle
        }
    };

    view! {
        <div class="search-suggestions" style="display: flex; justify-content: space-between; align-items: center; padding: 0 20px;">
            <div style="display: flex; align-items: center; gap: 8px;">
                <Show when=move || !suggestions.get().is_empty()>
                    <span style="margin-right: 16px; color: #374151;">"Also try searching for:"</span>
                    {move || suggestions.get().into_iter().map(|suggestion| {
                        let label = suggestion.clone();
                        view! {
                            <button
                                on:click=move |_| on_suggestion_click.run(suggestion.clone())
                                style="background: #fef7f0; border: 1px solid #e7760e; color: #e7760e; padding: 8px 16px; border-radius: 8px; cursor: pointer;"
                            >
                                {label}
                            </button>
                        }
                    }).collect_view()}
                </Show>
            </div>
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <ButtonGroup>
                    <Button
                        size=ButtonSize::Small
                        appearance=move || mode_appearance(ViewMode::List)
                        on_click=move |_| on_view_mode.run(ViewMode::List)
                    >
                        {icon("list")}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=move || mode_appearance(ViewMode::Grid)
                        on_click=move |_| on_view_mode.run(ViewMode::Grid)
                    >
                        {icon("grid")}
                    </Button>
                </ButtonGroup>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_share_click.run(())
                >
                    {icon("share")}
                </Button>
                <Show when=move || link_copied.get()>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>
                        "Link copied"
                    </Badge>
                </Show>
            </Flex>
        </div>
    }
}
