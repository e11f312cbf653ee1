use leptos::prelude::*;

use crate::core::content::Intro;
use crate::core::locations::Location;
use crate::core::motion::Transition;
use crate::core::services::{SERVICES, ServiceOffering};
use crate::ui::common::{BookButton, SectionHeading};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;

const BOOK_INTRO: Intro = Intro {
    title: "Book Your Service",
    subtitle: "Choose your preferred location",
};

/// Every offering with its per-location price, then booking links
#[component]
pub fn ServiceMenu() -> impl IntoView {
    view! {
        <div class="space-y-16">
            {SERVICES
                .iter()
                .enumerate()
                .map(|(i, service)| view! { <ServiceRow service=service flipped=i % 2 == 1/> })
                .collect_view()}
        </div>

        <div class="mt-20">
            <SectionHeading intro=BOOK_INTRO/>
            <div class="flex flex-col sm:flex-row justify-center gap-4">
                {Location::ALL
                    .into_iter()
                    .map(|location| view! { <BookButton location=location/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ServiceRow(service: &'static ServiceOffering, flipped: bool) -> impl IntoView {
    let (transition, order) = if flipped {
        (Transition::SLIDE_FROM_RIGHT, "lg:order-last")
    } else {
        (Transition::SLIDE_FROM_LEFT, "")
    };

    view! {
        <Motion transition=transition class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
            <div class=format!("aspect-video rounded-lg bg-base-300 flex items-center justify-center {order}")>
                <Icon name=icons::SCISSORS class="w-16 h-16 opacity-30"/>
            </div>
            <div id=service.id>
                <h3 class="text-3xl font-bold mb-4">{service.name}</h3>
                <p class="text-lg opacity-80 mb-6">{service.description}</p>
                <div class="grid grid-cols-2 gap-4 mb-6">
                    {Location::ALL
                        .into_iter()
                        .map(|location| view! {
                            <div class="rounded-lg bg-base-200 p-4">
                                <p class=format!("font-semibold {}", location.tone().text_class())>
                                    {location.name()}
                                </p>
                                <p class="text-2xl font-bold">{service.price.at(location)}</p>
                                <p class="text-sm opacity-70 flex items-center gap-1">
                                    <Icon name=icons::CLOCK class="w-4 h-4"/>
                                    {service.duration.at(location)}
                                </p>
                            </div>
                        })
                        .collect_view()}
                </div>
                <ul class="space-y-2">
                    {service
                        .features
                        .iter()
                        .map(|feature| view! {
                            <li class="flex items-center gap-2">
                                <span class="text-primary"><Icon name=icons::CHECK class="w-4 h-4"/></span>
                                {*feature}
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </Motion>
    }
}
