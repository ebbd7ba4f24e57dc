use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, Api};
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastStack;
use crate::components::transaction_modal::TransactionModal;
use crate::pages::analysis::AnalysisPage;
use crate::pages::status::StatusPage;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = commands::app_config();
    let api = Api::new(&config);
    provide_context(api);
    provide_context(AppState::new(&config));

    // Connectivity check on load; the form stays usable either way
    spawn_local(async move {
        api.check_status().await;
    });

    view! {
        <Router>
            <Navbar />
            <main class="content">
                <Routes fallback=|| view! { <p class="container py-5">"Page not found"</p> }>
                    <Route path=path!("/") view=AnalysisPage />
                    <Route path=path!("/status") view=StatusPage />
                </Routes>
            </main>
            <TransactionModal />
            <LoadingOverlay />
            <ToastStack />
        </Router>
    }
}
