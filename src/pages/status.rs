use fraudscope_core::{HealthStatus, ModelInfo};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::use_api;
use crate::components::status_badge::{CheckStatus, StatusBadge};

fn health_badge(health: &HealthStatus) -> (CheckStatus, String) {
    if health.is_healthy() {
        (CheckStatus::Pass, "Healthy".to_string())
    } else {
        (CheckStatus::Warn, format!("Status: {}", health.status))
    }
}

fn model_summary(info: &ModelInfo) -> Vec<(&'static str, String)> {
    let mut rows = vec![(
        "Model",
        info.model_name.clone().unwrap_or_else(|| "Unknown".to_string()),
    )];
    if let Some(acc) = info.accuracy {
        rows.push(("Accuracy", format!("{:.3}", acc)));
    }
    if let Some(f1) = info.f1_score {
        rows.push(("F1-score", format!("{:.3}", f1)));
    }
    rows.push(("Features", info.features.len().to_string()));
    rows
}

/// Connectivity and model details for the scoring API.
#[component]
pub fn StatusPage() -> impl IntoView {
    let api = use_api();
    let (checking, set_checking) = signal(false);
    let (health, set_health) = signal::<Option<Result<HealthStatus, String>>>(None);
    let (model, set_model) = signal::<Option<Result<ModelInfo, String>>>(None);

    let run_check = move || {
        set_checking.set(true);
        spawn_local(async move {
            set_health.set(Some(api.get_health().await));
            set_model.set(Some(api.get_model_info().await));
            set_checking.set(false);
        });
    };

    // Auto-run on mount
    run_check();

    view! {
        <div class="container page status-page py-5 mt-5">
            <h2>"API Status"</h2>
            <p class="text-muted">
                "Checks that the scoring service is reachable and has a model loaded."
            </p>

            <button
                class="btn btn-primary mb-4"
                on:click=move |_| run_check()
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Checking..." } else { "Run check again" }}
            </button>

            <ul class="list-group mb-4">
                {move || {
                    health.get().map(|result| match result {
                        Ok(h) => {
                            let (status, detail) = health_badge(&h);
                            let loaded = h.model_loaded.map(|loaded| {
                                let detail = if loaded { "Loaded" } else { "Not loaded" };
                                view! {
                                    <StatusBadge label="Model" status=CheckStatus::from_flag(loaded) detail=detail />
                                }
                            });
                            view! {
                                <StatusBadge label="Scoring API" status=status detail=detail />
                                {loaded}
                            }
                            .into_any()
                        }
                        Err(e) => view! {
                            <StatusBadge label="Scoring API" status=CheckStatus::Fail detail=e />
                        }
                        .into_any(),
                    })
                }}
            </ul>

            {move || {
                model.get().map(|result| match result {
                    Ok(info) => view! {
                        <table class="table table-sm model-info">
                            <tbody>
                                {model_summary(&info)
                                    .into_iter()
                                    .map(|(k, v)| view! { <tr><th>{k}</th><td>{v}</td></tr> })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                    Err(e) => view! { <p class="text-muted">{e}</p> }.into_any(),
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unhealthy_status_is_warning() {
        let h = HealthStatus {
            status: "degraded".to_string(),
            model_loaded: Some(false),
            timestamp: None,
        };
        assert_eq!(health_badge(&h), (CheckStatus::Warn, "Status: degraded".to_string()));
    }

    #[test]
    fn test_model_summary_skips_missing_scores() {
        let info = ModelInfo {
            model_name: Some("XGBoost".to_string()),
            accuracy: None,
            f1_score: None,
            features: vec!["Age".to_string(), "CIF".to_string()],
            extra: Default::default(),
        };
        let rows = model_summary(&info);
        assert_eq!(rows[0], ("Model", "XGBoost".to_string()));
        assert_eq!(rows[1], ("Features", "2".to_string()));
        assert_eq!(rows.len(), 2);
    }
}
