//! Site chrome: header with navigation, booking chooser, splash and footer.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::locations::Location;
use crate::core::menu::MenuState;
use crate::core::overlay::OverlayHit;
use crate::core::routes::{NAVIGATION, NavigationEntry, Page};
use crate::core::site;
use crate::ui::common::{BaseModal, BookButton, ButtonSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::splash::Splash;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let chooser_open = RwSignal::new(false);

    view! {
        <Splash/>
        <div class="min-h-screen flex flex-col">
            <Header on_book=Callback::new(move |_| chooser_open.set(true))/>
            <main class="flex-grow pt-16">{children()}</main>
            <Footer/>
        </div>
        <BookingChooser is_open=chooser_open/>
    }
}

#[component]
fn Header(on_book: Callback<()>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let location = use_location();
    let current = Memo::new(move |_| Page::from_path(&location.pathname.get()));

    // Back/forward navigation never leaves the menu open
    Effect::new(move |_| {
        current.track();
        menu.update(MenuState::close);
    });

    view! {
        <header class="fixed top-0 left-0 right-0 z-40 bg-base-100/90 backdrop-blur-md shadow-sm">
            <div class="container mx-auto max-w-6xl px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" attr:class="text-2xl font-bold tracking-tight hover:opacity-80 transition-opacity">
                        {site::BUSINESS_NAME}
                    </A>

                    // Desktop Navigation
                    <nav class="hidden md:flex items-center gap-6">
                        {NAVIGATION
                            .into_iter()
                            .map(|entry| view! {
                                <A
                                    href=entry.path()
                                    attr:class=move || nav_class(entry, current.get(), false)
                                >
                                    {entry.label}
                                </A>
                            })
                            .collect_view()}
                        <button class="btn btn-primary btn-sm" on:click=move |_| on_book.run(())>
                            "Book Now"
                        </button>
                    </nav>

                    // Mobile menu button
                    <button
                        class="md:hidden btn btn-ghost btn-square"
                        on:click=move |_| menu.update(MenuState::toggle)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || menu.with(MenuState::is_open).to_string()
                    >
                        {move || {
                            if menu.with(MenuState::is_open) {
                                view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !menu.with(MenuState::is_open)
                    class:max-h-96=move || menu.with(MenuState::is_open)
                >
                    <nav class="flex flex-col gap-1 py-4 border-t border-base-300">
                        {NAVIGATION
                            .into_iter()
                            .map(|entry| view! {
                                <A
                                    href=entry.path()
                                    attr:class=move || nav_class(entry, current.get(), true)
                                    // `A` performs the navigation to the returned path;
                                    // here selecting only closes the menu
                                    on:click=move |_| {
                                        menu.update(|m| {
                                            m.select_navigation(&entry);
                                        });
                                    }
                                >
                                    {entry.label}
                                </A>
                            })
                            .collect_view()}
                        <button
                            class="btn btn-primary mt-2"
                            on:click=move |_| {
                                menu.update(MenuState::close);
                                on_book.run(());
                            }
                        >
                            "Book Now"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

fn nav_class(entry: NavigationEntry, current: Page, mobile: bool) -> &'static str {
    match (entry.page == current, mobile) {
        (true, false) => "font-medium text-primary",
        (false, false) => "font-medium hover:text-primary transition-colors",
        (true, true) => "px-2 py-2 rounded-lg font-medium text-primary bg-base-200",
        (false, true) => "px-2 py-2 rounded-lg font-medium hover:bg-base-200 transition-colors",
    }
}

/// Dialog listing the booking platform of each location
#[component]
fn BookingChooser(is_open: RwSignal<bool>) -> impl IntoView {
    let on_hit = Callback::new(move |hit: OverlayHit| {
        if hit.dismisses() {
            is_open.set(false);
        }
    });

    view! {
        <BaseModal
            title=Signal::stored("Choose Your Cut".to_string())
            subtitle=Signal::stored("Pick the location that suits you".to_string())
            is_open=is_open.into()
            on_hit=on_hit
        >
            <div class="flex flex-col gap-4">
                {Location::ALL
                    .into_iter()
                    .map(|location| view! {
                        <div class="rounded-lg bg-base-200 p-4">
                            <p class="font-semibold">{location.name()}</p>
                            <p class="text-sm opacity-70 mb-3">{location.availability()}</p>
                            <BookButton location=location size=ButtonSize::Small class="w-full"/>
                        </div>
                    })
                    .collect_view()}
            </div>
        </BaseModal>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-neutral text-neutral-content">
            <div class="container mx-auto max-w-6xl px-4 py-12">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    // Brand
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{site::BUSINESS_NAME}</h3>
                        <p class="opacity-80 mb-4">{site::TAGLINE}</p>
                        <div class="flex gap-3">
                            {site::SOCIALS
                                .into_iter()
                                .map(|social| view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="opacity-80 hover:opacity-100 transition-opacity"
                                        aria-label=social.label
                                    >
                                        <Icon name=social.icon class="w-6 h-6"/>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Contact
                    <div>
                        <h4 class="font-semibold mb-4">"Contact"</h4>
                        <ul class="space-y-3 opacity-80">
                            {Location::ALL
                                .into_iter()
                                .map(|location| view! {
                                    <li class="flex items-start gap-2">
                                        <Icon name=icons::MAP_PIN class="w-4 h-4 mt-1 flex-shrink-0"/>
                                        <span>
                                            <span class="font-medium">{location.name()}</span>
                                            ": "
                                            {location.address()}
                                        </span>
                                    </li>
                                })
                                .collect_view()}
                            <li class="flex items-center gap-2">
                                <Icon name=icons::MAIL class="w-4 h-4"/>
                                <a href=site::mailto() class="link link-hover">{site::EMAIL}</a>
                            </li>
                        </ul>
                    </div>

                    // Booking
                    <div>
                        <h4 class="font-semibold mb-4">"Book an Appointment"</h4>
                        <div class="flex flex-col gap-3 items-start">
                            {Location::ALL
                                .into_iter()
                                .map(|location| view! { <BookButton location=location size=ButtonSize::Small/> })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-neutral-content/20 text-center text-sm opacity-70">
                    {site::copyright_now()}
                </div>
            </div>
        </footer>
    }
}
