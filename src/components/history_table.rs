//! Table of past analyses, newest first.

use fraudscope_core::HistoryRowView;
use leptos::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn HistoryTable() -> impl IntoView {
    let state = use_app_state();
    let rows = move || {
        state
            .history
            .with(|h| h.entries().iter().map(HistoryRowView::from).collect::<Vec<_>>())
    };

    view! {
        <div class="history-panel table-responsive">
            <style>{include_str!("history_table.css")}</style>
            <table class="table table-hover align-middle history-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Amount"</th>
                        <th>"Country"</th>
                        <th>"Prediction"</th>
                        <th>"Risk"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="6" class="text-center text-muted history-empty">
                                        "No transactions analysed yet"
                                    </td>
                                </tr>
                            }
                            .into_any()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr>
                                            <td>{row.timestamp}</td>
                                            <td>{row.amount}</td>
                                            <td>{row.country}</td>
                                            <td>
                                                <span class=format!("badge {}", row.label_class)>{row.label_text}</span>
                                            </td>
                                            <td>
                                                <span class=format!("badge {}", row.risk_class)>{row.risk_percent}</span>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn-sm btn-outline-primary"
                                                    on:click=move |_| state.selected.set(Some(id))
                                                >
                                                    <i class="bi bi-eye"></i>
                                                    " Details"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
