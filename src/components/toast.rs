use fraudscope_core::NoticeKind;
use leptos::prelude::*;

use crate::state::use_app_state;

fn icon_for(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "bi-check-circle-fill",
        NoticeKind::Info => "bi-info-circle-fill",
        NoticeKind::Warning => "bi-exclamation-triangle-fill",
        NoticeKind::Error => "bi-x-octagon-fill",
    }
}

/// Top-right stack of dismissible notifications.
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="toast-stack">
            {move || {
                state
                    .toasts
                    .with(|q| q.toasts().to_vec())
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("alert {} alert-dismissible fade show shadow", toast.notice.alert_class())
                                role="alert"
                            >
                                <i class=format!("bi {}", icon_for(toast.notice.kind))></i>
                                " "
                                {toast.notice.message.clone()}
                                <button
                                    type="button"
                                    class="btn-close"
                                    aria-label="Close"
                                    on:click=move |_| state.dismiss(id)
                                ></button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
