use fraudscope_core::TransactionDetailView;
use leptos::prelude::*;

use crate::state::use_app_state;

/// Details of the history entry picked in the table. Unknown ids render
/// nothing.
#[component]
pub fn TransactionModal() -> impl IntoView {
    let state = use_app_state();
    let detail = move || {
        let id = state.selected.get()?;
        state
            .history
            .with(|h| h.lookup(id).map(TransactionDetailView::from))
    };
    let close = move |_: leptos::ev::MouseEvent| state.selected.set(None);

    move || {
        detail().map(|d| {
            view! {
                <div class="modal d-block" tabindex="-1" role="dialog">
                    <div class="modal-dialog modal-dialog-centered" role="document">
                        <div class="modal-content">
                            <div class="modal-header">
                                <h5 class="modal-title">{format!("Transaction #{}", d.id)}</h5>
                                <button type="button" class="btn-close" aria-label="Close" on:click=close></button>
                            </div>
                            <div class="modal-body">
                                <p class="text-muted">{d.timestamp}</p>
                                <table class="table table-sm mb-0">
                                    <tbody>
                                        <tr><th>"Gender"</th><td>{d.gender}</td></tr>
                                        <tr><th>"Age"</th><td>{d.age}</td></tr>
                                        <tr><th>"Housing"</th><td>{d.housing}</td></tr>
                                        <tr><th>"Amount"</th><td>{d.amount}</td></tr>
                                        <tr><th>"Country"</th><td>{d.country}</td></tr>
                                        <tr><th>"Large purchase"</th><td>{d.large_purchase}</td></tr>
                                        <tr>
                                            <th>"Prediction"</th>
                                            <td><span class=format!("badge {}", d.label_class)>{d.label_text}</span></td>
                                        </tr>
                                        <tr><th>"Fraud probability"</th><td>{d.risk_percent}</td></tr>
                                    </tbody>
                                </table>
                            </div>
                            <div class="modal-footer">
                                <button type="button" class="btn btn-secondary" on:click=close>"Close"</button>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="modal-backdrop fade show" on:click=close></div>
            }
        })
    }
}
