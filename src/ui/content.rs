//! Generic page template driven by [`PageContent`] tables.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{
    CardStyle, Highlight, InternalLink, Intro, PageContent, Profile, Section, Testimonial,
};
use crate::core::motion::{STAGGER_STEP_MS, Transition};
use crate::ui::common::{
    BookButton, CtaSection, FaqList, LinkButton, PageFrame, PageHero, PageSection, SectionHeading,
};
use crate::ui::gallery::GalleryBrowser;
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::Motion;
use crate::ui::sections::{
    BookingOptions, ContactDetails, LocationsOverview, OpeningHours, PriceLists, ServiceMenu,
};

/// Hero, every section in order with alternating backgrounds, then the CTA
#[component]
pub fn ContentPage(content: &'static PageContent) -> impl IntoView {
    view! {
        <PageFrame page=content.page>
            <PageHero hero=content.hero/>
            {content
                .sections
                .iter()
                .enumerate()
                .map(|(i, section)| view! {
                    <PageSection alt=i % 2 == 1>
                        <SectionBody section=*section/>
                    </PageSection>
                })
                .collect_view()}
            <CtaSection/>
        </PageFrame>
    }
}

#[component]
fn SectionBody(section: Section) -> impl IntoView {
    match section {
        Section::Highlights {
            intro,
            items,
            style,
            more,
        } => view! { <HighlightGrid intro=intro items=items style=style more=more/> }.into_any(),
        Section::Story {
            title,
            paragraphs,
            link,
        } => view! { <Story title=title paragraphs=paragraphs link=link/> }.into_any(),
        Section::Profile { intro, profile } => view! {
            <SectionHeading intro=intro/>
            <ProfileCard profile=profile/>
        }
        .into_any(),
        Section::Testimonials { intro, items } => view! {
            <SectionHeading intro=intro/>
            <Testimonials items=items/>
        }
        .into_any(),
        Section::Faqs { intro, items } => view! {
            <SectionHeading intro=intro/>
            <FaqList items=items/>
        }
        .into_any(),
        Section::Locations { intro, style } => view! {
            <SectionHeading intro=intro/>
            <LocationsOverview style=style/>
        }
        .into_any(),
        Section::ServiceMenu => view! { <ServiceMenu/> }.into_any(),
        Section::BookingOptions => view! { <BookingOptions/> }.into_any(),
        Section::PriceLists { intro, more } => view! {
            <SectionHeading intro=intro/>
            <PriceLists more=more/>
        }
        .into_any(),
        Section::ContactDetails => view! { <ContactDetails/> }.into_any(),
        Section::OpeningHours { intro } => view! {
            <SectionHeading intro=intro/>
            <OpeningHours/>
        }
        .into_any(),
        Section::Gallery => view! { <GalleryBrowser/> }.into_any(),
    }
}

fn grid_columns(count: usize) -> &'static str {
    match count {
        0 | 1 => "grid-cols-1",
        2 => "md:grid-cols-2",
        3 => "md:grid-cols-3",
        _ => "md:grid-cols-2 lg:grid-cols-4",
    }
}

#[component]
fn HighlightGrid(
    intro: Intro,
    items: &'static [Highlight],
    style: CardStyle,
    more: Option<InternalLink>,
) -> impl IntoView {
    let layout = match style {
        CardStyle::Plain => "max-w-3xl mx-auto space-y-8".to_string(),
        _ => format!("grid grid-cols-1 {} gap-8", grid_columns(items.len())),
    };

    view! {
        <SectionHeading intro=intro/>
        <div class=layout>
            {items
                .iter()
                .enumerate()
                .map(|(i, item)| view! {
                    <Motion transition=Transition::REVEAL.staggered(i, STAGGER_STEP_MS)>
                        <HighlightCard item=*item style=style/>
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

#[component]
fn HighlightCard(item: Highlight, style: CardStyle) -> impl IntoView {
    let link = item.link.map(|link| {
        view! {
            <A href=link.href() attr:class=format!("inline-flex items-center gap-1 font-semibold {}", item.tone.text_class())>
                {link.label}
                <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4"/>
            </A>
        }
    });

    match style {
        CardStyle::Figure => view! {
            <Motion transition=Transition::HOVER_LIFT class="card bg-base-100 shadow-xl h-full">
                <figure class=format!("h-56 flex items-center justify-center {}", item.tone.soft_class())>
                    <Icon name=icons::SCISSORS class="w-16 h-16 opacity-40"/>
                </figure>
                <div class="card-body">
                    <h3 class="card-title">{item.title}</h3>
                    <p class="opacity-80">{item.body}</p>
                    {link}
                </div>
            </Motion>
        }
        .into_any(),
        CardStyle::Icon => view! {
            <div class="text-center p-6">
                <div class=format!("flex justify-center mb-4 {}", item.tone.text_class())>
                    <Icon name=item.icon.unwrap_or(icons::SCISSORS) class="w-12 h-12"/>
                </div>
                <h3 class="text-xl font-bold mb-2">{item.title}</h3>
                <p class="opacity-80">{item.body}</p>
                {link}
            </div>
        }
        .into_any(),
        CardStyle::Badge => view! {
            <div class="card bg-base-100 shadow-md h-full">
                <div class="card-body items-center text-center">
                    <div class=format!("w-16 h-16 rounded-full flex items-center justify-center mb-4 {}", item.tone.soft_class())>
                        <Icon name=item.icon.unwrap_or(icons::SCISSORS) class="w-8 h-8"/>
                    </div>
                    <h3 class="card-title">{item.title}</h3>
                    <p class="opacity-80">{item.body}</p>
                    {link}
                </div>
            </div>
        }
        .into_any(),
        CardStyle::Plain => view! {
            <div>
                <h3 class=format!("text-xl font-bold mb-3 {}", item.tone.text_class())>{item.title}</h3>
                <p class="opacity-80 leading-relaxed">{item.body}</p>
                {link}
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Story(
    title: &'static str,
    paragraphs: &'static [&'static str],
    link: Option<InternalLink>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
            <Motion transition=Transition::SLIDE_FROM_LEFT>
                <h2 class="text-3xl md:text-4xl font-bold mb-6">{title}</h2>
                {paragraphs
                    .iter()
                    .map(|p| view! { <p class="text-lg opacity-80 mb-4 leading-relaxed">{*p}</p> })
                    .collect_view()}
                {link.map(|link| view! {
                    <LinkButton href=link.href() label=link.label class="mt-4"/>
                })}
            </Motion>
            <Motion transition=Transition::SLIDE_FROM_RIGHT>
                <div class="aspect-video rounded-lg bg-base-300 flex items-center justify-center">
                    <Icon name=icons::IMAGE class="w-16 h-16 opacity-30"/>
                </div>
            </Motion>
        </div>
    }
}

#[component]
fn ProfileCard(profile: &'static Profile) -> impl IntoView {
    view! {
        <Motion class="card lg:flex-row bg-base-100 shadow-xl max-w-4xl mx-auto overflow-hidden">
            <figure class="lg:w-1/3 min-h-64 bg-base-300 flex items-center justify-center">
                <Icon name=icons::USERS class="w-20 h-20 opacity-30"/>
            </figure>
            <div class="card-body lg:w-2/3">
                <h3 class="card-title text-2xl">{profile.name}</h3>
                <p class="text-primary font-semibold mb-2">{profile.role}</p>
                {profile
                    .paragraphs
                    .iter()
                    .map(|p| view! { <p class="opacity-80 mb-3">{*p}</p> })
                    .collect_view()}
                <div class="card-actions mt-2">
                    <BookButton location=profile.books_at/>
                </div>
            </div>
        </Motion>
    }
}

#[component]
fn Testimonials(items: &'static [Testimonial]) -> impl IntoView {
    view! {
        <div class=format!("grid grid-cols-1 {} gap-8", grid_columns(items.len()))>
            {items
                .iter()
                .enumerate()
                .map(|(i, t)| view! {
                    <Motion transition=Transition::REVEAL.staggered(i, STAGGER_STEP_MS)>
                        <TestimonialCard testimonial=*t/>
                    </Motion>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-md h-full">
            <div class="card-body">
                <Stars rating=testimonial.rating/>
                <p class="italic opacity-80 my-4">"\u{201c}" {testimonial.quote} "\u{201d}"</p>
                <div class="flex items-center gap-3 mt-auto">
                    <div class=format!(
                        "w-10 h-10 rounded-full flex items-center justify-center font-bold text-white {}",
                        testimonial.tone.bg_class(),
                    )>{testimonial.initials()}</div>
                    <span class="font-semibold">{testimonial.name}</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Stars(rating: u8) -> impl IntoView {
    view! {
        <div class="flex gap-1 text-warning" aria-label=format!("{rating} out of 5 stars")>
            {(0..rating.min(5))
                .map(|_| view! { <Icon name=icons::STAR class="w-5 h-5 fill-current"/> })
                .collect_view()}
        </div>
    }
}
