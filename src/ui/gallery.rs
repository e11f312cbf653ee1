//! Filterable gallery grid with a lightbox.

use leptos::prelude::*;

use crate::core::gallery::{GALLERY_ITEMS, GalleryFilter, GalleryItem, GalleryState};
use crate::core::motion::Transition;
use crate::core::overlay::OverlayHit;
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;

#[component]
pub fn GalleryBrowser(
    #[prop(default = &GALLERY_ITEMS)] items: &'static [GalleryItem],
) -> impl IntoView {
    let state = RwSignal::new(GalleryState::default());
    let visible = Memo::new(move |_| state.with(|s| s.visible_in(items)));

    let lightbox_open = Signal::derive(move || state.with(|s| s.lightbox().is_some()));
    let lightbox_title = Signal::derive(move || {
        state.with(|s| s.lightbox().map(|item| item.title.to_string()).unwrap_or_default())
    });
    let on_hit = Callback::new(move |hit: OverlayHit| {
        state.update(|s| {
            s.dismiss_lightbox(hit);
        });
    });

    view! {
        <div class="flex flex-wrap justify-center gap-2 mb-10" role="tablist">
            {GalleryFilter::ALL
                .into_iter()
                .map(|filter| view! {
                    <button
                        class="btn btn-sm"
                        class:btn-primary=move || state.with(|s| s.filter() == filter)
                        class:btn-ghost=move || state.with(|s| s.filter() != filter)
                        role="tab"
                        aria-selected=move || state.with(|s| s.filter() == filter).to_string()
                        on:click=move |_| state.update(|s| s.set_filter(filter))
                    >
                        {filter.label()}
                    </button>
                })
                .collect_view()}
        </div>

        <Show
            when=move || visible.with(|items| !items.is_empty())
            fallback=|| view! {
                <p class="text-center py-12 opacity-70">
                    "No images found for this category. Please try another filter."
                </p>
            }
        >
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <For
                    each=move || visible.get()
                    key=|item| item.id
                    children=move |item: &'static GalleryItem| view! {
                        <Motion transition=Transition::FADE_UP>
                            <GalleryCard
                                item=item
                                on_open=Callback::new(move |_| state.update(|s| s.open_lightbox(item)))
                            />
                        </Motion>
                    }
                />
            </div>
        </Show>

        <BaseModal title=lightbox_title is_open=lightbox_open on_hit=on_hit max_width="max-w-3xl">
            {move || state.with(|s| s.lightbox()).map(|item| view! {
                <div class=format!("aspect-video rounded-lg flex items-center justify-center mb-4 {}", item.tone.soft_class())>
                    <Icon name=icons::IMAGE class="w-20 h-20 opacity-40"/>
                </div>
                <span class="badge badge-outline mb-2">{item.category.badge()}</span>
                <p class="opacity-80">{item.description}</p>
            })}
        </BaseModal>
    }
}

#[component]
fn GalleryCard(item: &'static GalleryItem, on_open: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="card bg-base-100 shadow-md w-full text-left overflow-hidden group"
            on:click=move |_| on_open.run(())
            aria-label=format!("Open {}", item.title)
        >
            <figure class=format!("relative h-64 flex items-center justify-center {}", item.tone.soft_class())>
                <span class="transition-transform duration-300 group-hover:scale-110">
                    <Icon name=icons::IMAGE class="w-16 h-16 opacity-40"/>
                </span>
                <span class="badge badge-neutral absolute top-3 right-3">{item.category.badge()}</span>
            </figure>
            <div class="card-body p-4">
                <h3 class="font-bold">{item.title}</h3>
                <p class="text-sm opacity-70">{item.description}</p>
            </div>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_STATE: &str = "No images found for this category. Please try another filter.";

    fn render(items: &'static [GalleryItem]) -> String {
        Owner::new().with(|| view! { <GalleryBrowser items=items/> }.to_html())
    }

    #[test]
    fn test_empty_gallery_shows_message() {
        let html = render(&[]);
        assert!(html.contains(EMPTY_STATE));
        assert!(!html.contains("grid-cols-3 gap-6"));
        // Filter bar stays available
        assert!(html.contains("Haircut Styles"));
    }

    #[test]
    fn test_site_gallery_renders_every_card() {
        let html = render(&GALLERY_ITEMS);
        assert!(!html.contains(EMPTY_STATE));
        for item in &GALLERY_ITEMS {
            assert!(html.contains(&format!("Open {}", item.title)), "card {}", item.id);
        }
        // Lightbox starts closed
        assert!(!html.contains("aria-modal"));
    }
}
