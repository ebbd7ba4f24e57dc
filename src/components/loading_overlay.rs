use leptos::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let state = use_app_state();

    view! {
        <Show when=move || state.loading.get()>
            <div class="loading-overlay">
                <div class="loading-box text-center">
                    <div class="spinner-border text-primary" role="status"></div>
                    <p class="mt-3 mb-2">"Analysing transaction..."</p>
                    <button
                        type="button"
                        class="btn btn-sm btn-outline-light"
                        on:click=move |_| state.loading.set(false)
                    >
                        "Hide"
                    </button>
                </div>
            </div>
        </Show>
    }
}
