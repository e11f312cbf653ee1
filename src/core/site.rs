//! Business-wide details shown in the shell.

use chrono::{Datelike, Utc};

pub const BUSINESS_NAME: &str = "SW Blends";

pub const TAGLINE: &str = "Premium barbershop in Manly, Sydney. Classic cuts with modern style.";

pub const SITE_URL: &str = "https://swblends.com";

pub const EMAIL: &str = "contact@swblends.com";

/// Shown where a phone number would go
pub const PHONE_NOTE: &str = "Please email for phone details";

/// Social profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    /// Icon name, see `ui::icon::icons`
    pub icon: &'static str,
    pub url: &'static str,
}

pub const SOCIALS: [SocialLink; 2] = [
    SocialLink {
        label: "Instagram",
        icon: "instagram",
        url: "https://instagram.com/sw_blends_/",
    },
    SocialLink {
        label: "TikTok",
        icon: "tiktok",
        url: "https://www.tiktok.com/@sw.blends",
    },
];

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

/// Copyright line for `year`
pub fn copyright(year: i32) -> String {
    format!("© {year} {BUSINESS_NAME}. All rights reserved.")
}

/// Copyright line for the current year
pub fn copyright_now() -> String {
    copyright(Utc::now().year())
}

/// Absolute URL for a site path, used for canonical and og tags
pub fn absolute_url(path: &str) -> String {
    format!("{SITE_URL}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright() {
        assert_eq!(copyright(2025), "© 2025 SW Blends. All rights reserved.");
        assert!(copyright_now().starts_with("© 20"));
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(), "mailto:contact@swblends.com");
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("/gallery"), "https://swblends.com/gallery");
    }

    #[test]
    fn test_socials_are_https() {
        assert!(SOCIALS.iter().all(|s| s.url.starts_with("https://")));
    }
}
