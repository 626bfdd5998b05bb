use crate::shared::format::{class_line, description_preview, first_word, format_timestamp};
use crate::shared::icons::icon;
use contracts::search::TrademarkRecord;
use leptos::prelude::*;

/// Строка таблицы результатов, подготовленная для отображения
#[derive(Clone, Debug)]
pub struct TrademarkRow {
    pub id: String,
    pub mark: String,
    pub mark_tile: String,
    pub owner: String,
    pub registration_date: String,
    pub status_label: String,
    pub status_color: &'static str,
    pub status_date: String,
    pub renewal_date: String,
    pub description: String,
    pub classes: String,
}

impl From<&TrademarkRecord> for TrademarkRow {
    fn from(r: &TrademarkRecord) -> Self {
        Self {
            id: r.id.clone(),
            mark: r.mark_identification.clone(),
            mark_tile: first_word(&r.mark_identification).to_string(),
            owner: r.current_owner.clone(),
            registration_date: format_timestamp(r.registration_date),
            status_label: r.status_type.label().to_string(),
            status_color: r.status_type.color(),
            status_date: format_timestamp(r.status_date),
            renewal_date: format_timestamp(r.renewal_date),
            description: description_preview(&r.descriptions),
            classes: class_line(&r.class_codes),
        }
    }
}

pub fn status_dot(color: &'static str) -> impl IntoView {
    view! {
        <span style=format!(
            "display: inline-block; width: 12px; height: 12px; margin-right: 8px; border-radius: 50%; background-color: {};",
            color
        )></span>
    }
}

#[component]
pub fn ResultList(#[prop(into)] rows: Signal<Vec<TrademarkRow>>) -> impl IntoView {
    view! {
        <table style="width: 100%; border-collapse: collapse; table-layout: auto;">
            <thead>
                <tr style="text-align: left; background: #f3f4f6;">
                    <th style="padding: 16px; font-size: 14px; font-weight: 600; color: #374151; width: 20%;">"Mark"</th>
                    <th style="padding: 16px; font-size: 14px; font-weight: 600; color: #374151; width: 30%;">"Details"</th>
                    <th style="padding: 16px; font-size: 14px; font-weight: 600; color: #374151; width: 30%;">"Status"</th>
                    <th style="padding: 16px; font-size: 14px; font-weight: 600; color: #374151; width: 20%;">"Class/Description"</th>
                </tr>
            </thead>
            <tbody style="cursor: pointer;">
                {move || rows.get().into_iter().map(|row| {
                    view! {
                        <tr style="border-top: 1px solid #e5e7eb;">
                            // Mark
                            <td style="padding: 16px;">
                                <div style="background: white; box-shadow: 0 4px 6px rgba(0,0,0,0.1); padding: 16px; text-align: center; border-radius: 8px;">
                                    <span style="color: #4b5563; font-size: 14px; font-weight: 600;">{row.mark_tile}</span>
                                </div>
                            </td>

                            // Details
                            <td style="padding: 16px; font-size: 14px; color: #4b5563;">
                                <p style="font-weight: 600; color: #1f2937; margin: 0;">{row.mark}</p>
                                <p style="margin: 0;">{row.owner}</p>
                                <div style="margin: 8px 0;"></div>
                                <p style="color: #6b7280; margin: 0;">{row.id}</p>
                                <p style="color: #6b7280; margin: 0;">{row.registration_date}</p>
                            </td>

                            // Status
                            <td style="padding: 16px; font-size: 14px; color: #4b5563;">
                                <div style="display: flex; align-items: center;">
                                    {status_dot(row.status_color)}
                                    <p style="font-weight: 600; color: #1f2937; margin: 0;">{row.status_label}</p>
                                </div>
                                <p style="color: #6b7280; margin: 4px 0 0 0;">
                                    "on " <span style="color: #0a0a0a; font-weight: 700;">{row.status_date}</span>
                                </p>
                                <div style="margin-top: 8px; display: flex; align-items: center; color: #6b7280;">
                                    {icon("renewal")}
                                    <span style="padding-left: 8px;">{row.renewal_date}</span>
                                </div>
                            </td>

                            // Class/Description
                            <td style="padding: 16px; font-size: 14px; color: #4b5563;">
                                <p style="margin: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">{row.description}</p>
                                <p style="color: #6b7280; margin: 0;">{row.classes}</p>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
