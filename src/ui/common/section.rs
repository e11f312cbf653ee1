use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::content::{CALL_TO_ACTION, Hero, HeroAction, Intro};
use crate::core::motion::Transition;
use crate::core::routes::Page;
use crate::core::site;
use crate::core::theme::Tone;
use crate::ui::common::button::{BookButton, ButtonSize, LinkButton};
use crate::ui::motion::Motion;

/// Document metadata plus the entrance animation of a routed page
#[component]
pub fn PageFrame(page: Page, children: Children) -> impl IntoView {
    let url = site::absolute_url(page.path().unwrap_or("/"));

    view! {
        <Title text=page.title()/>
        <Meta name="description" content=page.description()/>
        {(page == Page::Home).then(|| view! {
            <Meta property="og:type" content="website"/>
            <Meta property="og:url" content=url.clone()/>
            <Meta property="og:title" content=page.title()/>
            <Meta property="og:description" content=page.description()/>
            <Link rel="canonical" href=url.clone()/>
        })}
        <Motion transition=Transition::PAGE_ENTER>
            {children()}
        </Motion>
    }
}

/// Full-width block with alternating background
#[component]
pub fn PageSection(
    #[prop(default = false)] alt: bool,
    #[prop(optional)] id: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let background = if alt { "bg-base-200" } else { "bg-base-100" };

    view! {
        <section id=id class=format!("py-16 px-4 {background}")>
            <div class="container mx-auto max-w-6xl">{children()}</div>
        </section>
    }
}

#[component]
pub fn SectionHeading(intro: Intro) -> impl IntoView {
    view! {
        <Motion class="text-center mb-12">
            <h2 class="text-3xl md:text-4xl font-bold mb-4">{intro.title}</h2>
            <p class="text-lg opacity-80 max-w-2xl mx-auto">{intro.subtitle}</p>
        </Motion>
    }
}

#[component]
pub fn PageHero(hero: Hero) -> impl IntoView {
    if !hero.is_banner() {
        return view! {
            <section class="py-16 px-4 bg-base-200">
                <Motion transition=Transition::FADE_UP class="container mx-auto max-w-4xl text-center">
                    <h1 class="text-4xl md:text-5xl font-bold mb-6">{hero.title}</h1>
                    <p class="text-xl opacity-80">{hero.subtitle}</p>
                </Motion>
            </section>
        }
        .into_any();
    }

    view! {
        <section class="min-h-[70vh] flex items-center px-4 bg-base-200 hero-pattern">
            <div class="container mx-auto max-w-6xl py-20">
                <Motion transition=Transition::FADE_UP class="max-w-2xl">
                    <h1 class="text-5xl md:text-6xl font-bold leading-tight mb-6">
                        {hero.title}
                        {hero.accent.map(|accent| view! {
                            <br/>
                            <span class="text-primary">{accent}</span>
                        })}
                    </h1>
                    <p class="text-xl opacity-80 mb-8">{hero.subtitle}</p>
                </Motion>
                <Motion transition=Transition::FADE_UP.with_delay(200) class="flex flex-wrap gap-4">
                    {hero
                        .actions
                        .iter()
                        .map(|action| match *action {
                            HeroAction::Book(location) => view! {
                                <BookButton location=location label="Book Now" size=ButtonSize::Large/>
                            }
                            .into_any(),
                            HeroAction::Visit(link) => view! {
                                <LinkButton
                                    href=link.href()
                                    label=link.label
                                    tone=Tone::Primary
                                    outline=true
                                    size=ButtonSize::Large
                                />
                            }
                            .into_any(),
                        })
                        .collect_view()}
                </Motion>
            </div>
        </section>
    }
    .into_any()
}

/// Closing banner linking to the main booking platform
#[component]
pub fn CtaSection() -> impl IntoView {
    let cta = CALL_TO_ACTION;

    view! {
        <section class="py-16 px-4 bg-primary text-primary-content">
            <Motion class="container mx-auto max-w-3xl text-center">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">{cta.title}</h2>
                <p class="text-lg opacity-90 mb-8">{cta.body}</p>
                <BookButton
                    location=cta.location
                    label=cta.label
                    size=ButtonSize::Large
                    class="btn-accent border-none"
                />
            </Motion>
        </section>
    }
}
