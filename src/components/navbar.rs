use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::dom;
use crate::scroll;

/// In-page sections reachable from the navbar, as `(section id, label)`.
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("predict", "Analyse"),
    ("history", "History"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (compact, set_compact) = signal(false);
    let (show_top, set_show_top) = signal(false);
    let (active, set_active) = signal(String::from("home"));
    let ticking = StoredValue::new(false);

    let refresh = move || {
        let y = dom::scroll_y();
        set_compact.set(scroll::navbar_compact(y));
        set_show_top.set(scroll::scroll_top_visible(y));
        let sections = dom::section_bounds();
        if let Some(id) = scroll::active_section(y, &sections) {
            if active.get_untracked() != id {
                set_active.set(id.to_string());
            }
        }
    };

    // At most one refresh per animation frame
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if ticking.get_value() {
            return;
        }
        ticking.set_value(true);
        request_animation_frame(move || {
            refresh();
            ticking.set_value(false);
        });
    });
    on_cleanup(move || handle.remove());
    request_animation_frame(refresh);

    let go_to = move |ev: MouseEvent, id: &'static str| {
        if pathname.get_untracked() == "/" {
            ev.prevent_default();
            dom::scroll_to_section(id);
            set_active.set(id.to_string());
        }
    };

    view! {
        <nav class=move || {
            if compact.get() {
                "navbar navbar-expand-lg navbar-dark fixed-top scrolled"
            } else {
                "navbar navbar-expand-lg navbar-dark fixed-top"
            }
        }>
            <style>{include_str!("navbar.css")}</style>
            <div class="container">
                <a class="navbar-brand" href="/" on:click=move |ev| go_to(ev, "home")>
                    <i class="bi bi-shield-check"></i>
                    " FraudScope"
                </a>
                <ul class="navbar-nav ms-auto">
                    {NAV_SECTIONS
                        .iter()
                        .map(|&(id, label)| {
                            view! {
                                <li class="nav-item">
                                    <a
                                        class=move || {
                                            if pathname.get() == "/" && active.get() == id {
                                                "nav-link active"
                                            } else {
                                                "nav-link"
                                            }
                                        }
                                        href=format!("/#{}", id)
                                        on:click=move |ev| go_to(ev, id)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="nav-item">
                        <a
                            class=move || if pathname.get() == "/status" { "nav-link active" } else { "nav-link" }
                            href="/status"
                        >
                            "API Status"
                        </a>
                    </li>
                </ul>
            </div>
        </nav>

        <button
            class=move || if show_top.get() { "scroll-top visible" } else { "scroll-top" }
            aria-label="Back to top"
            on:click=move |_| dom::scroll_to_top()
        >
            <i class="bi bi-arrow-up"></i>
        </button>
    }
}
