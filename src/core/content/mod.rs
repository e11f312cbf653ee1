//! Static page content.
//!
//! Every routed page except the 404 is described by a [`PageContent`]: a hero
//! plus an ordered list of [`Section`]s. `ui::content::ContentPage` renders
//! any of them, so adding or reordering page blocks is a table edit.

mod pages;

pub use pages::*;

use super::locations::Location;
use super::routes::Page;
use super::theme::Tone;

/// Heading and subheading above a section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intro {
    pub title: &'static str,
    pub subtitle: &'static str,
}

/// Link to another page of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InternalLink {
    pub label: &'static str,
    pub page: Page,
}

impl InternalLink {
    pub fn href(&self) -> &'static str {
        self.page.path().unwrap_or("/")
    }
}

/// Call to action in a hero
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroAction {
    /// External booking link for a location
    Book(Location),
    /// Link to another page
    Visit(InternalLink),
}

/// Banner at the top of a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    /// Second title line rendered in the primary colour
    pub accent: Option<&'static str>,
    pub subtitle: &'static str,
    pub actions: &'static [HeroAction],
}

impl Hero {
    /// Large banner with actions (home) versus a compact page header
    pub fn is_banner(&self) -> bool {
        !self.actions.is_empty()
    }
}

/// Frequently asked question
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Client review
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    /// Stars out of five
    pub rating: u8,
    pub tone: Tone,
}

impl Testimonial {
    /// Initials shown in the avatar, taken from the first letter of each word
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().find(|c| c.is_alphabetic()))
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Card in a grid of highlights
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Icon name, see `ui::icon::icons`
    pub icon: Option<&'static str>,
    pub title: &'static str,
    pub body: &'static str,
    pub tone: Tone,
    pub link: Option<InternalLink>,
}

/// How a grid of highlights is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardStyle {
    /// Image placeholder above the text
    Figure,
    /// Large tinted icon above centered text
    Icon,
    /// Icon inside a tinted circle
    Badge,
    /// Text only, stacked in a single column
    Plain,
}

/// Staff profile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub paragraphs: &'static [&'static str],
    pub books_at: Location,
}

/// How the locations block is laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LocationsStyle {
    /// One card with both addresses and a shared map
    Combined,
    /// A card per location with hours, description and its own map
    Detailed,
}

/// One block of a page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Highlights {
        intro: Intro,
        items: &'static [Highlight],
        style: CardStyle,
        more: Option<InternalLink>,
    },
    Story {
        title: &'static str,
        paragraphs: &'static [&'static str],
        link: Option<InternalLink>,
    },
    Profile {
        intro: Intro,
        profile: &'static Profile,
    },
    Testimonials {
        intro: Intro,
        items: &'static [Testimonial],
    },
    Faqs {
        intro: Intro,
        items: &'static [Faq],
    },
    Locations {
        intro: Intro,
        style: LocationsStyle,
    },
    /// Full service menu followed by booking links for both locations
    ServiceMenu,
    /// A booking card per location
    BookingOptions,
    /// Per-location price lists derived from the service menu
    PriceLists {
        intro: Intro,
        more: Option<InternalLink>,
    },
    /// Contact details next to the locations map
    ContactDetails,
    OpeningHours {
        intro: Intro,
    },
    /// Filterable gallery grid with lightbox
    Gallery,
}

/// Closing banner shown at the bottom of every content page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallToAction {
    pub title: &'static str,
    pub body: &'static str,
    pub label: &'static str,
    pub location: Location,
}

/// Everything a content page renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageContent {
    pub page: Page,
    pub hero: Hero,
    pub sections: &'static [Section],
}

/// Content table for `page`, `None` for the 404 page
pub fn content_for(page: Page) -> Option<&'static PageContent> {
    match page {
        Page::Home => Some(&HOME),
        Page::Services => Some(&SERVICES_PAGE),
        Page::About => Some(&ABOUT),
        Page::Booking => Some(&BOOKING),
        Page::Gallery => Some(&GALLERY),
        Page::Contact => Some(&CONTACT),
        Page::NotFound => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_routed_page_has_content() {
        for page in Page::ROUTED {
            let content = content_for(page).expect("content table");
            assert_eq!(content.page, page);
            assert!(!content.sections.is_empty());
        }
        assert!(content_for(Page::NotFound).is_none());
    }

    #[test]
    fn test_only_home_has_a_banner() {
        for page in Page::ROUTED {
            let hero = content_for(page).unwrap().hero;
            assert_eq!(hero.is_banner(), page == Page::Home, "{page:?}");
        }
    }

    #[test]
    fn test_gallery_page_hosts_the_gallery() {
        let gallery_sections = |page| {
            content_for(page)
                .unwrap()
                .sections
                .iter()
                .filter(|s| matches!(s, Section::Gallery))
                .count()
        };
        assert_eq!(gallery_sections(Page::Gallery), 1);
        assert_eq!(gallery_sections(Page::Home), 0);
    }

    #[test]
    fn test_faq_sections_are_populated() {
        for page in Page::ROUTED {
            for section in content_for(page).unwrap().sections {
                if let Section::Faqs { items, .. } = section {
                    assert_eq!(items.len(), 4, "{page:?}");
                }
            }
        }
    }

    #[test]
    fn test_testimonial_initials() {
        let t = Testimonial {
            name: "Mike J.",
            quote: "",
            rating: 5,
            tone: Tone::Primary,
        };
        assert_eq!(t.initials(), "MJ");
    }

    #[test]
    fn test_ratings_are_out_of_five() {
        for page in Page::ROUTED {
            for section in content_for(page).unwrap().sections {
                if let Section::Testimonials { items, .. } = section {
                    assert!(items.iter().all(|t| (1..=5).contains(&t.rating)));
                }
            }
        }
    }

    #[test]
    fn test_internal_links_point_at_routes() {
        let link = InternalLink {
            label: "Our Services",
            page: Page::Services,
        };
        assert_eq!(link.href(), "/services");
    }
}
