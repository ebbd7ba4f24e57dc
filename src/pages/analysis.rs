use leptos::prelude::*;

use crate::components::history_table::HistoryTable;
use crate::components::particles::Particles;
use crate::components::result_panel::ResultPanel;
use crate::components::transaction_form::TransactionForm;
use crate::dom;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <Particles />
            <div class="container hero-content text-center">
                <h1 class="display-4 fw-bold">"Transaction Fraud Detection"</h1>
                <p class="lead">
                    "Score a card transaction against the fraud model in seconds."
                </p>
                <div class="d-flex justify-content-center gap-3 mt-4">
                    <button class="btn btn-light btn-lg" on:click=move |_| dom::scroll_to_section("predict")>
                        <i class="bi bi-search"></i>
                        " Analyse a transaction"
                    </button>
                    <button class="btn btn-outline-light btn-lg" on:click=move |_| dom::scroll_to_section("history")>
                        <i class="bi bi-clock-history"></i>
                        " View history"
                    </button>
                </div>
            </div>
        </section>

        <section id="predict" class="container py-5">
            <h2 class="section-title mb-4">"Analyse a transaction"</h2>
            <div class="card shadow-sm">
                <div class="card-body">
                    <TransactionForm />
                </div>
            </div>
            <ResultPanel />
        </section>

        <section id="history" class="container py-5">
            <h2 class="section-title mb-4">"Recent analyses"</h2>
            <HistoryTable />
        </section>
    }
}
