use leptos::prelude::*;

/// Inline stroke icon (24x24 grid). Unknown names render an empty svg.
#[component]
pub fn Icon(
    /// Icon name, one of [`icons`]
    name: &'static str,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
            inner_html=paths(name)
        ></svg>
    }
}

fn paths(name: &str) -> &'static str {
    match name {
        icons::SCISSORS => {
            r#"<circle cx="6" cy="6" r="3"/><path d="M8.12 8.12 12 12"/><path d="M20 4 8.12 15.88"/><circle cx="6" cy="18" r="3"/><path d="M14.8 14.8 20 20"/>"#
        }
        icons::COFFEE => {
            r#"<path d="M17 8h1a4 4 0 1 1 0 8h-1"/><path d="M3 8h14v9a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4Z"/><line x1="6" x2="6" y1="2" y2="4"/><line x1="10" x2="10" y1="2" y2="4"/><line x1="14" x2="14" y1="2" y2="4"/>"#
        }
        icons::USERS => {
            r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M22 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#
        }
        icons::CLOCK => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
        icons::MAP_PIN => {
            r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
        }
        icons::MAIL => {
            r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
        }
        icons::PHONE => {
            r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
        }
        icons::CALENDAR => {
            r#"<rect width="18" height="18" x="3" y="4" rx="2" ry="2"/><line x1="16" x2="16" y1="2" y2="6"/><line x1="8" x2="8" y1="2" y2="6"/><line x1="3" x2="21" y1="10" y2="10"/>"#
        }
        icons::INSTAGRAM => {
            r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
        }
        icons::TIKTOK => r#"<path d="M9 12a4 4 0 1 0 4 4V4a5 5 0 0 0 5 5"/>"#,
        icons::MENU => {
            r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
        }
        icons::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
        icons::STAR => {
            r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
        }
        icons::ARROW_LEFT => r#"<path d="m12 19-7-7 7-7"/><path d="M19 12H5"/>"#,
        icons::HOME => {
            r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
        }
        icons::CHEVRON_DOWN => r#"<path d="m6 9 6 6 6-6"/>"#,
        icons::CHEVRON_RIGHT => r#"<path d="m9 18 6-6-6-6"/>"#,
        icons::CHECK => r#"<path d="M20 6 9 17l-5-5"/>"#,
        icons::IMAGE => {
            r#"<rect width="18" height="18" x="3" y="3" rx="2" ry="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/>"#
        }
        _ => "",
    }
}

/// Predefined icon names
pub mod icons {
    pub const SCISSORS: &str = "scissors";
    pub const COFFEE: &str = "coffee";
    pub const USERS: &str = "users";
    pub const CLOCK: &str = "clock";
    pub const MAP_PIN: &str = "map-pin";
    pub const MAIL: &str = "mail";
    pub const PHONE: &str = "phone";
    pub const CALENDAR: &str = "calendar";
    pub const INSTAGRAM: &str = "instagram";
    pub const TIKTOK: &str = "tiktok";
    pub const MENU: &str = "menu";
    pub const X: &str = "x";
    pub const STAR: &str = "star";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const HOME: &str = "home";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CHECK: &str = "check";
    pub const IMAGE: &str = "image";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{Section, content_for};
    use crate::core::routes::Page;
    use crate::core::site::SOCIALS;

    #[test]
    fn test_unknown_icon_is_empty() {
        assert_eq!(paths("does-not-exist"), "");
        assert!(!paths(icons::SCISSORS).is_empty());
    }

    #[test]
    fn test_content_icons_exist() {
        for page in Page::ROUTED {
            for section in content_for(page).unwrap().sections {
                if let Section::Highlights { items, .. } = section {
                    for icon in items.iter().filter_map(|h| h.icon) {
                        assert!(!paths(icon).is_empty(), "{icon}");
                    }
                }
            }
        }
        for social in SOCIALS {
            assert!(!paths(social.icon).is_empty(), "{}", social.icon);
        }
    }
}
