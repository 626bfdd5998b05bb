use super::result_list::{status_dot, TrademarkRow};
use leptos::prelude::*;
use thaw::*;

/// Карточки результатов (режим сетки)
#[component]
pub fn ResultGrid(#[prop(into)] rows: Signal<Vec<TrademarkRow>>) -> impl IntoView {
    view! {
        <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px;">
            {move || rows.get().into_iter().map(|row| {
                view! {
                    <Card>
                        <div style="font-weight: 700; color: #1f2937;">{row.mark}</div>
                        <div style="font-size: 13px; color: #4b5563;">{row.owner}</div>
                        <div style="display: flex; align-items: center; margin-top: 8px; font-size: 13px;">
                            {status_dot(row.status_color)}
                            <span style="font-weight: 600;">{row.status_label}</span>
                            <span style="color: #6b7280; margin-left: 6px;">{format!("on {}", row.status_date)}</span>
                        </div>
                        <div style="font-size: 12px; color: #6b7280; margin-top: 8px;">{row.description}</div>
                        <div style="font-size: 12px; color: #6b7280;">{row.classes}</div>
                        <div style="font-size: 11px; color: #9ca3af; margin-top: 8px;">
                            {row.id} " · " {row.registration_date}
                        </div>
                    </Card>
                }
            }).collect_view()}
        </div>
    }
}
