use leptos::prelude::*;

use crate::core::content::InternalLink;
use crate::core::locations::Location;
use crate::core::motion::{STAGGER_STEP_MS, Transition};
use crate::core::services::{SERVICES, price_list};
use crate::ui::common::{BookButton, ButtonSize, LinkButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;

/// One booking card per location
#[component]
pub fn BookingOptions() -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {Location::ALL
                .into_iter()
                .enumerate()
                .map(|(i, location)| view! {
                    <Motion transition=Transition::REVEAL.staggered(i, STAGGER_STEP_MS * 2)>
                        <BookingCard location=location/>
                    </Motion>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn BookingCard(location: Location) -> impl IntoView {
    let details = [
        (icons::CALENDAR, location.availability()),
        (icons::CLOCK, location.hours_summary()),
        (icons::SCISSORS, location.pricing_summary()),
    ];

    view! {
        <div class=format!("card bg-base-100 shadow-xl h-full border-t-4 {}", border_class(location))>
            <div class="card-body">
                <h2 class="card-title text-2xl">{location.name()}</h2>
                <p class="opacity-80 mb-4">{location.booking_pitch()}</p>
                <ul class="space-y-3 mb-4">
                    {details
                        .into_iter()
                        .map(|(icon, text)| view! {
                            <li class="flex items-start gap-3">
                                <span class=location.tone().text_class()>
                                    <Icon name=icon class="w-5 h-5 mt-0.5"/>
                                </span>
                                <span>{text}</span>
                            </li>
                        })
                        .collect_view()}
                    <li class="flex items-start gap-3">
                        <span class=location.tone().text_class()>
                            <Icon name=icons::MAP_PIN class="w-5 h-5 mt-0.5"/>
                        </span>
                        <span>{location.address()}</span>
                    </li>
                </ul>
                <div class="card-actions mt-auto">
                    <BookButton location=location size=ButtonSize::Large class="w-full"/>
                </div>
                <p class="text-xs text-center opacity-60">
                    {format!("Booking handled by {}", location.platform().name())}
                </p>
            </div>
        </div>
    }
}

fn border_class(location: Location) -> &'static str {
    match location {
        Location::MainShop => "border-primary",
        Location::BarXBar => "border-secondary",
    }
}

/// Price list per location, derived from the service menu
#[component]
pub fn PriceLists(more: Option<InternalLink>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {Location::ALL
                .into_iter()
                .map(|location| view! {
                    <Motion class="card bg-base-100 shadow-md">
                        <div class="card-body">
                            <h3 class=format!("card-title {}", location.tone().text_class())>
                                {location.name()}
                            </h3>
                            <table class="table w-full">
                                <tbody>
                                    {price_list(&SERVICES, location)
                                        .into_iter()
                                        .map(|line| view! {
                                            <tr>
                                                <td class="font-medium">{line.name}</td>
                                                <td class="opacity-70">{line.duration}</td>
                                                <td class="text-right font-bold">{line.price}</td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </Motion>
                })
                .collect_view()}
        </div>
        {more.map(|link| view! {
            <div class="text-center mt-12">
                <LinkButton href=link.href() label=link.label outline=true/>
            </div>
        })}
    }
}
