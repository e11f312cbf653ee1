use leptos::prelude::*;

use crate::core::locations::Location;
use crate::core::motion::{STAGGER_STEP_MS, Transition};
use crate::core::site;
use crate::ui::common::{BookButton, ButtonSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::map::LocationsMap;
use crate::ui::motion::Motion;
use crate::ui::sections::HoursTable;

#[component]
pub fn ContactDetails() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
            <Motion transition=Transition::SLIDE_FROM_LEFT class="space-y-8">
                <h2 class="text-3xl font-bold">"Get In Touch"</h2>

                <ContactLine icon=icons::MAIL title="Email">
                    <a href=site::mailto() class="link link-hover">{site::EMAIL}</a>
                </ContactLine>
                <ContactLine icon=icons::PHONE title="Phone">
                    <span class="opacity-80">{site::PHONE_NOTE}</span>
                </ContactLine>
                {Location::ALL
                    .into_iter()
                    .map(|location| view! {
                        <ContactLine icon=icons::MAP_PIN title=location.name()>
                            <span class="opacity-80">{location.address()}</span>
                        </ContactLine>
                    })
                    .collect_view()}

                <div>
                    <h3 class="font-semibold mb-3">"Follow Us"</h3>
                    <div class="flex gap-4">
                        {site::SOCIALS
                            .into_iter()
                            .map(|social| view! {
                                <a
                                    href=social.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-circle btn-outline"
                                    aria-label=social.label
                                >
                                    <Icon name=social.icon class="w-5 h-5"/>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="flex flex-wrap gap-4">
                    {Location::ALL
                        .into_iter()
                        .map(|location| view! { <BookButton location=location size=ButtonSize::Small/> })
                        .collect_view()}
                </div>
            </Motion>

            <Motion transition=Transition::SLIDE_FROM_RIGHT>
                <LocationsMap class="h-96 lg:h-full min-h-96"/>
            </Motion>
        </div>
    }
}

#[component]
fn ContactLine(icon: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="w-10 h-10 rounded-full bg-primary/10 text-primary flex items-center justify-center flex-shrink-0">
                <Icon name=icon class="w-5 h-5"/>
            </div>
            <div>
                <h3 class="font-semibold">{title}</h3>
                {children()}
            </div>
        </div>
    }
}

/// Hours tables for both locations
#[component]
pub fn OpeningHours() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {Location::ALL
                .into_iter()
                .enumerate()
                .map(|(i, location)| view! {
                    <Motion
                        transition=Transition::REVEAL.staggered(i, STAGGER_STEP_MS * 2)
                        class="card bg-base-100 shadow-md"
                    >
                        <div class="card-body">
                            <h3 class=format!("card-title {}", location.tone().text_class())>
                                {location.name()}
                            </h3>
                            <HoursTable location=location/>
                            <p class="text-sm opacity-60 mt-2">{location.hours_note()}</p>
                        </div>
                    </Motion>
                })
                .collect_view()}
        </div>
    }
}
