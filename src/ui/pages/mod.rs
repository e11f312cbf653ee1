//! Routed pages
//!
//! Every page except the 404 is a [`ContentPage`] over its content table.

mod not_found;

use leptos::prelude::*;

use crate::core::content;
use crate::ui::content::ContentPage;

pub use not_found::NotFoundPage;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <ContentPage content=&content::HOME/> }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! { <ContentPage content=&content::SERVICES_PAGE/> }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! { <ContentPage content=&content::ABOUT/> }
}

#[component]
pub fn BookingPage() -> impl IntoView {
    view! { <ContentPage content=&content::BOOKING/> }
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    view! { <ContentPage content=&content::GALLERY/> }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! { <ContentPage content=&content::CONTACT/> }
}
