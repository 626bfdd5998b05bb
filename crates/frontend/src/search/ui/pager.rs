use contracts::search::PageItem;
use leptos::prelude::*;
use thaw::*;

/// Pager over the page window "1 … c-1 c c+1 … N" (pages are 1-indexed)
#[component]
pub fn Pager(
    #[prop(into)] items: Signal<Vec<PageItem>>,
    #[prop(into)] current_page: Signal<u32>,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination" style="display: flex; justify-content: center; margin: 32px 0;">
            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                {move || items.get().into_iter().map(|item| match item {
                    PageItem::Ellipsis => view! {
                        <span style="padding: 4px 12px;">"..."</span>
                    }.into_any(),
                    PageItem::Page(page) => view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || {
                                if current_page.get() == page {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Secondary
                                }
                            }
                            on_click=move |_| on_page_change.run(page)
                        >
                            {page.to_string()}
                        </Button>
                    }.into_any(),
                }).collect_view()}
            </Flex>
        </div>
    }
}
