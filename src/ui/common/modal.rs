use leptos::prelude::*;

use crate::core::overlay::OverlayHit;
use crate::ui::icon::{Icon, icons};

/// Overlay with a centered panel.
///
/// Every activation is reported through `on_hit`; the owner decides whether
/// it dismisses (see [`OverlayHit::dismisses`]). Clicks inside the panel never
/// reach the backdrop.
#[component]
pub fn BaseModal(
    /// Modal title
    title: Signal<String>,
    /// Optional subtitle/description
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
    /// Whether modal is open
    is_open: Signal<bool>,
    on_hit: Callback<OverlayHit>,
    children: ChildrenFn,
    /// Maximum width class (default: max-w-md)
    #[prop(default = "max-w-md")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_hit.run(OverlayHit::Escape);
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    let children = StoredValue::new(children);

    view! {
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 motion-fade"
                on:click=move |_| on_hit.run(OverlayHit::Backdrop)
                role="dialog"
                aria-modal="true"
            >
                <div
                    class=format!("relative w-full {max_width} card bg-base-100 shadow-xl")
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_hit.run(OverlayHit::Panel);
                    }
                >
                    <button
                        class="btn-icon absolute top-3 right-3"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_hit.run(OverlayHit::CloseButton);
                        }
                        aria-label="Close"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>

                    <div class="p-6">
                        <h3 class="text-2xl font-bold mb-1 pr-8">{move || title.get()}</h3>
                        {subtitle.map(|s| view! { <p class="opacity-70 mb-4">{move || s.get()}</p> })}
                        {move || children.with_value(|children| children())}
                    </div>
                </div>
            </div>
        </Show>
    }
}
