//! Site pages and the navigation table.
//!
//! `Page::from_path` is total: anything that is not one of the known routes
//! resolves to [`Page::NotFound`].

/// Every page the site can render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Services,
    About,
    Booking,
    Gallery,
    Contact,
    NotFound,
}

impl Page {
    /// Pages reachable through a route, in navigation order
    pub const ROUTED: [Page; 6] = [
        Page::Home,
        Page::Services,
        Page::About,
        Page::Booking,
        Page::Gallery,
        Page::Contact,
    ];

    /// Resolve a URL path to the page it renders.
    ///
    /// Query strings and fragments are ignored, a single trailing slash is
    /// tolerated, and every unknown path yields `NotFound`.
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = path.strip_suffix('/').unwrap_or(path);

        match trimmed {
            "" => Page::Home,
            "/services" => Page::Services,
            "/about" => Page::About,
            "/booking" => Page::Booking,
            "/gallery" => Page::Gallery,
            "/contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// Route path, `None` for the catch-all page
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Page::Home => Some("/"),
            Page::Services => Some("/services"),
            Page::About => Some("/about"),
            Page::Booking => Some("/booking"),
            Page::Gallery => Some("/gallery"),
            Page::Contact => Some("/contact"),
            Page::NotFound => None,
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "SW Blends | Premium Barbershop in Manly, Sydney",
            Page::Services => "Our Services | SW Blends Barbershop",
            Page::About => "About Us | SW Blends Barbershop",
            Page::Booking => "Book an Appointment | SW Blends Barbershop",
            Page::Gallery => "Gallery | SW Blends Barbershop",
            Page::Contact => "Contact Us | SW Blends Barbershop",
            Page::NotFound => "Page Not Found | SW Blends Barbershop",
        }
    }

    /// Meta description
    pub fn description(&self) -> &'static str {
        match self {
            Page::Home => {
                "SW Blends offers premium men's haircuts and grooming services in Manly, Sydney. Book your appointment today for a fresh look."
            }
            Page::Services => {
                "Explore our range of premium haircuts and grooming services at SW Blends. From classic cuts to beard trims, we have options for every style."
            }
            Page::About => {
                "Learn about SW Blends, our barbers, and our commitment to providing premium haircuts and grooming services in Manly, Sydney."
            }
            Page::Booking => {
                "Book your haircut appointment with SW Blends. Choose between our main shop with Sander Woodward or at barXbar for your convenience."
            }
            Page::Gallery => {
                "View our gallery showcasing haircut styles, our locations, and the SW Blends barbershop experience in Manly, Sydney."
            }
            Page::Contact => {
                "Get in touch with SW Blends Barbershop. Find our locations in Manly, Sydney and book your appointment today."
            }
            Page::NotFound => "The page you're looking for doesn't exist.",
        }
    }
}

/// One entry of the header/footer navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub page: Page,
}

impl NavigationEntry {
    pub fn path(&self) -> &'static str {
        // Navigation only ever lists routed pages
        self.page.path().unwrap_or("/")
    }
}

/// Header navigation, in display order
pub const NAVIGATION: [NavigationEntry; 6] = [
    NavigationEntry { label: "Home", page: Page::Home },
    NavigationEntry { label: "Services", page: Page::Services },
    NavigationEntry { label: "About", page: Page::About },
    NavigationEntry { label: "Booking", page: Page::Booking },
    NavigationEntry { label: "Gallery", page: Page::Gallery },
    NavigationEntry { label: "Contact", page: Page::Contact },
];

/// Suggestions offered by the 404 page
pub const NOT_FOUND_SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        page: Page::Services,
        title: "Our Services",
        blurb: "Explore our range of haircuts and styles",
    },
    Suggestion {
        page: Page::Booking,
        title: "Book an Appointment",
        blurb: "Schedule your next cut with us",
    },
    Suggestion {
        page: Page::Contact,
        title: "Contact Us",
        blurb: "Get in touch with our team",
    },
];

/// A link card pointing at another page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub page: Page,
    pub title: &'static str,
    pub blurb: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path(""), Page::Home);
        assert_eq!(Page::from_path("/services"), Page::Services);
        assert_eq!(Page::from_path("/about"), Page::About);
        assert_eq!(Page::from_path("/booking"), Page::Booking);
        assert_eq!(Page::from_path("/gallery"), Page::Gallery);
        assert_eq!(Page::from_path("/contact"), Page::Contact);
    }

    #[test]
    fn test_trailing_slash_query_and_fragment() {
        assert_eq!(Page::from_path("/services/"), Page::Services);
        assert_eq!(Page::from_path("/gallery?filter=haircuts"), Page::Gallery);
        assert_eq!(Page::from_path("/contact#map"), Page::Contact);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in [
            "/nonexistent-page",
            "/services/extra",
            "/Services",
            "/admin",
            "//",
            "/gallery/1",
            "services",
        ] {
            assert_eq!(Page::from_path(path), Page::NotFound, "path {path}");
        }
    }

    #[test]
    fn test_path_round_trip_for_routed_pages() {
        for page in Page::ROUTED {
            let path = page.path().expect("routed page has a path");
            assert_eq!(Page::from_path(path), page);
        }
        assert_eq!(Page::NotFound.path(), None);
    }

    #[test]
    fn test_navigation_order() {
        let labels: Vec<_> = NAVIGATION.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Home", "Services", "About", "Booking", "Gallery", "Contact"]
        );
        assert!(NAVIGATION.iter().all(|e| e.page != Page::NotFound));
    }

    #[test]
    fn test_not_found_suggestions() {
        let pages: Vec<_> = NOT_FOUND_SUGGESTIONS.iter().map(|s| s.page).collect();
        assert_eq!(pages, [Page::Services, Page::Booking, Page::Contact]);
    }

    #[test]
    fn test_titles_are_branded() {
        for page in Page::ROUTED.into_iter().chain([Page::NotFound]) {
            assert!(page.title().contains("SW Blends"));
            assert!(!page.description().is_empty());
        }
    }
}
