use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::locations::Location;
use crate::core::theme::Tone;
use crate::ui::icon::Icon;

/// Button size options
#[derive(Clone, Copy, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_class(tone: Tone, outline: bool, size: ButtonSize, extra: &str) -> String {
    let outline = if outline { "btn-outline" } else { "" };
    format!("{} {} {} {}", tone.button_class(), outline, size.class(), extra)
}

/// Button-styled link opening an external site in a new tab
#[component]
pub fn ExternalButton(
    href: &'static str,
    label: &'static str,
    #[prop(default = Tone::Primary)] tone: Tone,
    #[prop(default = false)] outline: bool,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=button_class(tone, outline, size, class)
        >
            {icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
            {label}
        </a>
    }
}

/// Booking link for a location, labelled after the location by default
#[component]
pub fn BookButton(
    location: Location,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <ExternalButton
            href=location.booking_url()
            label=label.unwrap_or(location.book_label())
            tone=location.tone()
            size=size
            class=class
        />
    }
}

/// Button-styled client-side link to another page
#[component]
pub fn LinkButton(
    href: &'static str,
    label: &'static str,
    #[prop(default = Tone::Primary)] tone: Tone,
    #[prop(default = false)] outline: bool,
    #[prop(default = ButtonSize::Medium)] size: ButtonSize,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    view! {
        <A href=href attr:class=button_class(tone, outline, size, class)>
            {icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
            {label}
        </A>
    }
}
