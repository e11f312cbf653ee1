use leptos::prelude::*;

use crate::core::content::LocationsStyle;
use crate::core::locations::{Location, day_name};
use crate::core::motion::{STAGGER_STEP_MS, Transition};
use crate::ui::common::BookButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::map::LocationsMap;
use crate::ui::motion::Motion;

#[component]
pub fn LocationsOverview(style: LocationsStyle) -> impl IntoView {
    match style {
        LocationsStyle::Combined => view! { <Combined/> }.into_any(),
        LocationsStyle::Detailed => view! {
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                {Location::ALL
                    .into_iter()
                    .enumerate()
                    .map(|(i, location)| view! {
                        <Motion transition=Transition::REVEAL.staggered(i, STAGGER_STEP_MS * 2)>
                            <LocationCard location=location/>
                        </Motion>
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}

/// Both addresses next to one shared map
#[component]
fn Combined() -> impl IntoView {
    view! {
        <Motion class="card bg-base-100 shadow-xl">
            <div class="card-body grid grid-cols-1 md:grid-cols-2 gap-8">
                <div class="space-y-8">
                    {Location::ALL
                        .into_iter()
                        .map(|location| view! {
                            <div>
                                <h3 class="text-xl font-bold mb-2 flex items-center gap-2">
                                    <span class=location.tone().text_class()>
                                        <Icon name=icons::MAP_PIN class="w-5 h-5"/>
                                    </span>
                                    {location.name()}
                                </h3>
                                <p class="opacity-80">{location.address()}</p>
                                <p class="opacity-80 text-sm mb-4">{location.hours_summary()}</p>
                                <BookButton location=location/>
                            </div>
                        })
                        .collect_view()}
                </div>
                <LocationsMap class="h-80"/>
            </div>
        </Motion>
    }
}

#[component]
fn LocationCard(location: Location) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl h-full">
            <div class="card-body">
                <h3 class=format!("card-title text-2xl {}", location.tone().text_class())>
                    {location.name()}
                </h3>
                <p class="flex items-center gap-2 opacity-80">
                    <Icon name=icons::MAP_PIN class="w-4 h-4"/>
                    {location.address()}
                </p>
                <p class="opacity-80 my-2">{location.about()}</p>
                <HoursTable location=location/>
                <LocationsMap focus=location class="h-48 my-4"/>
                <div class="card-actions">
                    <BookButton location=location/>
                </div>
            </div>
        </div>
    }
}

/// Opening hours for every day of the week
#[component]
pub fn HoursTable(location: Location) -> impl IntoView {
    view! {
        <table class="table table-sm w-full">
            <tbody>
                {location
                    .hours()
                    .iter()
                    .map(|day| view! {
                        <tr>
                            <td class="font-medium">{day_name(day.day)}</td>
                            <td class=if day.hours.is_some() { "text-right" } else { "text-right opacity-50" }>
                                {day.hours.unwrap_or("Closed")}
                            </td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
