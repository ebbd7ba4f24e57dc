//! Decorative floating dots behind the hero section.

use leptos::prelude::*;

pub const PARTICLE_COUNT: usize = 50;

/// Inline style for one particle. Inputs are uniform samples in `[0, 1)`.
fn particle_style(x: f64, y: f64, delay: f64, speed: f64) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
        x * 100.0,
        y * 100.0,
        delay * 6.0,
        4.0 + speed * 6.0
    )
}

#[component]
pub fn Particles() -> impl IntoView {
    let styles: Vec<String> = (0..PARTICLE_COUNT)
        .map(|_| {
            particle_style(
                js_sys::Math::random(),
                js_sys::Math::random(),
                js_sys::Math::random(),
                js_sys::Math::random(),
            )
        })
        .collect();

    view! {
        <div class="particles" aria-hidden="true">
            {styles
                .into_iter()
                .map(|style| view! { <div class="particle" style=style></div> })
                .collect_view()}
        </div>
    }
}
