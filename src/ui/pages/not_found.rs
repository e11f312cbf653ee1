//! Not found page component
//!
//! Rendered for every path outside the route table. When server rendered the
//! response carries a 404 status.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::motion::{STAGGER_STEP_MS, Transition};
use crate::core::routes::{NOT_FOUND_SUGGESTIONS, Page};
use crate::ui::common::PageFrame;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        use leptos_router::hooks::use_location;

        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
        tracing::warn!(path = %use_location().pathname.get_untracked(), "Page not found");
    }

    view! {
        <PageFrame page=Page::NotFound>
            <section class="min-h-[70vh] flex items-center justify-center px-4 py-16 bg-base-200">
                <div class="text-center max-w-2xl">
                    <h1 class="text-8xl font-bold text-primary mb-4">"404"</h1>
                    <h2 class="text-3xl font-bold mb-4">"Page Not Found"</h2>
                    <p class="text-lg opacity-80 mb-8">
                        "The page you're looking for doesn't exist or has been moved. Let's get you back on track."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-12">
                        <A href="/" attr:class="btn btn-primary">
                            <Icon name=icons::HOME class="w-4 h-4"/>
                            "Back to Home"
                        </A>
                        <button class="btn btn-outline" on:click=go_back>
                            <Icon name=icons::ARROW_LEFT class="w-4 h-4"/>
                            "Go Back"
                        </button>
                    </div>

                    <h3 class="text-xl font-semibold mb-6">"You might be looking for:"</h3>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                        {NOT_FOUND_SUGGESTIONS
                            .into_iter()
                            .enumerate()
                            .map(|(i, suggestion)| view! {
                                <Motion transition=Transition::FADE_UP.staggered(i, STAGGER_STEP_MS)>
                                    <A
                                        href=suggestion.page.path().unwrap_or("/")
                                        attr:class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow h-full"
                                    >
                                        <div class="card-body items-center text-center">
                                            <h4 class="card-title text-primary">{suggestion.title}</h4>
                                            <p class="text-sm opacity-70">{suggestion.blurb}</p>
                                        </div>
                                    </A>
                                </Motion>
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </PageFrame>
    }
}

/// Step back in the browser history
fn go_back(_: leptos::ev::MouseEvent) {
    #[cfg(feature = "hydrate")]
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(err) = history.back() {
            leptos::logging::warn!("history.back failed: {err:?}");
        }
    }
}
