use leptos::prelude::*;

use crate::core::motion::Transition;
use crate::core::site::BUSINESS_NAME;

/// Delay of the second band behind the first
const SECOND_BAND_DELAY_MS: u32 = 300;

/// Intro overlay shown on the first page load.
///
/// Two skewed bands sweep across the business name; the overlay unmounts
/// when the second band finishes. Client-side navigation keeps the layout
/// mounted, so it never shows again.
#[component]
pub fn Splash() -> impl IntoView {
    let (visible, set_visible) = signal(true);

    let first = Transition::SPLASH_SWEEP;
    let second = Transition::SPLASH_SWEEP.with_delay(SECOND_BAND_DELAY_MS);

    view! {
        <Show when=move || visible.get()>
            <div
                class="splash fixed inset-0 z-[100] flex items-center justify-center bg-base-100 overflow-hidden"
                style=format!("--splash-exit-delay:{}ms;", second.total_ms())
                aria-hidden="true"
            >
                <h1 class="relative z-10 text-5xl md:text-7xl font-bold tracking-tight">
                    {BUSINESS_NAME}
                </h1>
                <div
                    class=format!("absolute inset-y-0 w-1/2 bg-primary {}", first.class())
                    style=first.style()
                ></div>
                <div
                    class=format!("absolute inset-y-0 w-1/2 bg-secondary {}", second.class())
                    style=second.style()
                    on:animationend=move |_| set_visible.set(false)
                ></div>
            </div>
        </Show>
    }
}
