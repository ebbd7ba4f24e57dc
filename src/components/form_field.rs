//! One labelled input or select bound to the shared form values.

use std::collections::HashMap;

use fraudscope_core::fields::FieldKind;
use fraudscope_core::validation::validate_field;
use fraudscope_core::{FieldId, FormValues, FraudScopeError};
use leptos::prelude::*;

/// Inline error messages keyed by field.
pub type FieldErrors = HashMap<FieldId, String>;

/// Re-check one field after it loses focus.
pub fn check_on_blur(errors: &mut FieldErrors, field: FieldId, raw: &str) {
    match validate_field(field, raw) {
        Ok(()) => {
            errors.remove(&field);
        }
        Err(err) => {
            errors.insert(field, err.message);
        }
    }
}

/// Inline errors for a rejected submission. Other failures leave no inline
/// marks, so the map comes back empty.
pub fn errors_from_submit(err: &FraudScopeError) -> FieldErrors {
    match err {
        FraudScopeError::Validation(errors) => errors
            .iter()
            .map(|fe| (fe.field, fe.message.clone()))
            .collect(),
        _ => FieldErrors::new(),
    }
}

fn attr_number(value: Option<f64>) -> Option<String> {
    value.map(|v| v.to_string())
}

#[component]
pub fn FormField(
    field: FieldId,
    values: RwSignal<FormValues>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    let id = field.dom_id();
    let current = move || values.with(|v| v.get(field).to_string());
    let error = move || errors.with(|e| e.get(&field).cloned());
    let control_class = move |base: &'static str| {
        if error().is_some() {
            format!("{} is-invalid", base)
        } else {
            base.to_string()
        }
    };

    let on_blur = move |_| {
        let raw = values.with_untracked(|v| v.get(field).to_string());
        errors.update(|e| check_on_blur(e, field, &raw));
    };

    // Typing clears the error; it comes back on the next blur if still wrong
    let on_edit = move |ev: leptos::ev::Event| {
        values.update(|v| v.set(field, event_target_value(&ev)));
        if errors.with_untracked(|e| e.contains_key(&field)) {
            errors.update(|e| {
                e.remove(&field);
            });
        }
    };

    let control = match field.kind() {
        FieldKind::Number { min, max, step } => view! {
            <input
                type="number"
                id=id
                name=field.wire_name()
                class=move || control_class("form-control")
                min=attr_number(min)
                max=attr_number(max)
                step=attr_number(step)
                required=field.is_required()
                prop:value=current
                on:input=on_edit
                on:blur=on_blur
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=id
                name=field.wire_name()
                class=move || control_class("form-select")
                required=field.is_required()
                on:change=on_edit
                on:blur=on_blur
            >
                {options
                    .iter()
                    .map(|&(value, label)| {
                        view! {
                            <option value=value prop:selected=move || values.with(|v| v.get(field) == value)>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="col-md-6 mb-3">
            <label for=id class="form-label">{field.label()}</label>
            {control}
            {move || error().map(|msg| view! { <div class="invalid-feedback">{msg}</div> })}
        </div>
    }
}
