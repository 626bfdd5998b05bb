use crate::shared::icons::icon;
use contracts::search::{StatusFilter, StatusSet};
use leptos::prelude::*;
use thaw::*;

/// Панель фильтра по статусу: "All" сбрасывает, остальные переключают
#[component]
pub fn StatusFilterPanel(
    #[prop(into)] selected: Signal<Option<StatusSet>>,
    /// `None` is the "All" button
    on_filter_click: Callback<Option<StatusFilter>>,
) -> impl IntoView {
    let is_selected = move |status: StatusFilter| {
        selected.with(|set| set.as_ref().is_some_and(|s| s.contains(&status)))
    };

    view! {
        <div style="background: white; box-shadow: 0 1px 2px rgba(0,0,0,0.06); padding: 20px; border-radius: 6px;">
            <p style="font-weight: 700; margin: 0 0 8px 0; display: flex; align-items: center; gap: 6px;">
                {icon("filter")} "Status"
            </p>
            <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                <Button
                    appearance=move || {
                        if selected.with(|s| s.is_none()) {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                    }
                    on_click=move |_| on_filter_click.run(None)
                >
                    "All"
                </Button>
                {StatusFilter::ALL.into_iter().map(|status| {
                    view! {
                        <Button
                            appearance=move || {
                                if is_selected(status) {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            }
                            on_click=move |_| on_filter_click.run(Some(status))
                        >
                            <span style=format!(
                                "display: inline-block; width: 12px; height: 12px; margin-right: 8px; border-radius: 50%; background-color: {};",
                                status.color()
                            )></span>
                            {status.label()}
                        </Button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
