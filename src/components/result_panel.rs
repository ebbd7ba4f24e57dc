use fraudscope_core::{Recommendation, ResultView};
use leptos::prelude::*;

use crate::components::transaction_form::RESULTS_SECTION_ID;
use crate::state::use_app_state;

/// Card and icon classes. Both already carry their Bootstrap base class.
fn recommendation_classes(recommendation: Recommendation) -> (String, &'static str) {
    (
        format!("{} recommendation", recommendation.alert_class()),
        recommendation.icon_class(),
    )
}

#[component]
fn RecommendationCard(recommendation: Recommendation) -> impl IntoView {
    let (card_class, icon_class) = recommendation_classes(recommendation);
    view! {
        <div class=card_class>
            <h5 class="alert-heading">
                <i class=icon_class></i>
                " "
                {recommendation.title()}
            </h5>
            <ul class="mb-0">
                {recommendation
                    .actions()
                    .iter()
                    .map(|&action| view! { <li>{action}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

fn render_result(view: ResultView) -> impl IntoView {
    let bar_style = view.bar_style();
    view! {
        <div class="card result-card shadow">
            <div class=format!("card-header {}", view.header_class)>
                <h4 class="mb-0 result-headline">{view.headline}</h4>
            </div>
            <div class="card-body">
                <div class="row text-center mb-3">
                    <div class="col-6">
                        <div class="metric-label">"Fraud probability"</div>
                        <div class="metric-value">{view.fraud_percent.clone()}</div>
                    </div>
                    <div class="col-6">
                        <div class="metric-label">"Confidence"</div>
                        <div class="metric-value">{view.confidence_percent.clone()}</div>
                    </div>
                </div>
                <div class="progress risk-bar mb-3">
                    <div
                        class=format!("progress-bar {}", view.bar_class)
                        role="progressbar"
                        style=bar_style
                        aria-valuenow=format!("{:.1}", view.bar_width)
                        aria-valuemin="0"
                        aria-valuemax="100"
                    ></div>
                </div>
                <p class="text-center">
                    <span class=format!("badge risk-indicator {}", view.header_class)>
                        {view.risk_label}
                    </span>
                </p>
                <RecommendationCard recommendation=view.recommendation />
            </div>
        </div>
    }
}

/// Latest analysis; hidden until one has completed.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div
            id=RESULTS_SECTION_ID
            class=move || {
                if state.result.with(Option::is_some) {
                    "results-section py-4 fade-in"
                } else {
                    "results-section d-none"
                }
            }
        >
            <style>{include_str!("result_panel.css")}</style>
            <h3 class="section-title mb-3">"Analysis result"</h3>
            {move || state.result.get().map(render_result)}
        </div>
    }
}
