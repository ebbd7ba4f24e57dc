//! Direct browser access: `localStorage`, scrolling and layout reads.
//!
//! Everything else in the app goes through Leptos views and signals.

use fraudscope_core::{FraudScopeError, StoragePort};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::scroll::{anchor_target, SectionBounds};

fn js_message(e: JsValue) -> String {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()));
    error_text(e.as_string(), message, || format!("{:?}", e))
}

/// Thrown strings first, then `Error.message` (which covers `DOMException`),
/// then the value's debug form.
fn error_text(
    thrown: Option<String>,
    message: Option<String>,
    fallback: impl FnOnce() -> String,
) -> String {
    thrown
        .or(message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(fallback)
}

fn local_storage() -> Result<web_sys::Storage, FraudScopeError> {
    web_sys::window()
        .ok_or_else(|| FraudScopeError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|e| FraudScopeError::Storage(js_message(e)))?
        .ok_or_else(|| FraudScopeError::Storage("localStorage is unavailable".to_string()))
}

/// `StoragePort` over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl StoragePort for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FraudScopeError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| FraudScopeError::Storage(js_message(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FraudScopeError> {
        // Quota errors surface here
        local_storage()?
            .set_item(key, value)
            .map_err(|e| FraudScopeError::Storage(js_message(e)))
    }
}

/// Origin the page was served from; the scoring API lives there too.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn smooth_scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Smoothly bring an element to the top of the viewport.
pub fn scroll_into_view(id: &str) {
    if let Some(el) = element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

/// Jump to a section, leaving room for the fixed navbar.
pub fn scroll_to_section(id: &str) {
    if let Some(el) = element_by_id(id) {
        smooth_scroll_to(anchor_target(el.offset_top() as f64));
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

/// Layout of every `<section id=...>` currently in the document.
pub fn section_bounds() -> Vec<SectionBounds> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBounds {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect()
}
