//! The transaction form and its submit pipeline.

use fraudscope_core::analysis;
use fraudscope_core::fields::FORM_SECTIONS;
use fraudscope_core::{FormPreset, FormValues, Notice, StoragePort};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::use_api;
use crate::components::form_field::{errors_from_submit, FieldErrors, FormField};
use crate::dom;
use crate::state::{use_app_state, AppState, Followup, TOAST_LIFETIME};

pub const RESULTS_SECTION_ID: &str = "results";

fn preset_button(preset: FormPreset) -> (&'static str, &'static str) {
    match preset {
        FormPreset::FraudExample => ("Load fraud example", "Fraud example loaded"),
        FormPreset::Legitimate => ("Legitimate sample", "Legitimate sample loaded"),
        FormPreset::Suspicious => ("Suspicious sample", "Suspicious sample loaded"),
        FormPreset::Default => ("Defaults", "Default values loaded"),
    }
}

/// Swap in new form values. The previous result no longer matches the form,
/// so it is hidden along with any inline errors.
fn replace_values<S: StoragePort + Send + Sync + 'static>(
    state: &AppState<S>,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
    new_values: FormValues,
    message: &str,
) -> Followup {
    values.set(new_values);
    errors.update(|e| e.clear());
    state.result.set(None);
    state.post(Notice::info(message))
}

#[component]
pub fn TransactionForm() -> impl IntoView {
    let state = use_app_state();
    let api = use_api();
    let values = RwSignal::new(FormValues::default());
    let errors = RwSignal::new(FieldErrors::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let input = match analysis::prepare(&values.get_untracked()) {
            Ok(input) => {
                errors.update(|e| e.clear());
                input
            }
            Err(e) => {
                errors.set(errors_from_submit(&e));
                state.notify(Notice::from_error(&e));
                return;
            }
        };

        state.loading.set(true);
        spawn_local(async move {
            let response = api.predict(&input).await;
            let settled = state.settle(input, response);
            if settled.scored {
                request_animation_frame(|| dom::scroll_into_view(RESULTS_SECTION_ID));
            }
            for (delay, followup) in settled.followups {
                state.schedule(delay, followup);
            }
        });
    };

    let load_preset = move |preset: FormPreset| {
        let dismiss = replace_values(
            &state,
            values,
            errors,
            FormValues::preset(preset),
            preset_button(preset).1,
        );
        state.schedule(TOAST_LIFETIME, dismiss);
    };

    let on_reset = move |_| {
        let dismiss = replace_values(&state, values, errors, FormValues::default(), "Form reset");
        state.schedule(TOAST_LIFETIME, dismiss);
    };

    view! {
        <form class="transaction-form" novalidate=true on:submit=on_submit>
            {FORM_SECTIONS
                .iter()
                .map(|&(title, fields)| {
                    view! {
                        <fieldset class="form-section mb-4">
                            <legend class="form-section-title">{title}</legend>
                            <div class="row">
                                {fields
                                    .iter()
                                    .map(|&field| view! { <FormField field=field values=values errors=errors /> })
                                    .collect_view()}
                            </div>
                        </fieldset>
                    }
                })
                .collect_view()}

            <div class="form-actions d-flex flex-wrap gap-2">
                <button type="submit" class="btn btn-primary btn-lg">
                    <i class="bi bi-search"></i>
                    " Analyse transaction"
                </button>
                <button type="button" class="btn btn-outline-secondary" on:click=on_reset>
                    <i class="bi bi-arrow-counterclockwise"></i>
                    " Reset"
                </button>
                {[FormPreset::FraudExample, FormPreset::Legitimate, FormPreset::Suspicious]
                    .into_iter()
                    .map(|preset| {
                        view! {
                            <button
                                type="button"
                                class="btn btn-outline-warning"
                                on:click=move |_| load_preset(preset)
                            >
                                {preset_button(preset).0}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </form>
    }
}
