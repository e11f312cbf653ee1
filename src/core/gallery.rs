//! Gallery content and the filter/lightbox state of the gallery page.

use derive_more::Display;

use super::overlay::OverlayHit;
use super::theme::Tone;

/// Category a gallery item belongs to
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum GalleryCategory {
    #[display("main-shop")]
    MainShop,
    #[display("barxbar")]
    BarXBar,
    #[display("haircuts")]
    Haircuts,
}

impl GalleryCategory {
    /// Text shown on the card badge
    pub fn badge(&self) -> &'static str {
        match self {
            GalleryCategory::MainShop => "main shop",
            GalleryCategory::BarXBar => "barxbar",
            GalleryCategory::Haircuts => "haircuts",
        }
    }
}

/// Active gallery filter
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Hash)]
pub enum GalleryFilter {
    #[default]
    #[display("all")]
    All,
    #[display("{_0}")]
    Only(GalleryCategory),
}

impl GalleryFilter {
    /// Filter buttons in display order
    pub const ALL: [GalleryFilter; 4] = [
        GalleryFilter::All,
        GalleryFilter::Only(GalleryCategory::MainShop),
        GalleryFilter::Only(GalleryCategory::BarXBar),
        GalleryFilter::Only(GalleryCategory::Haircuts),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GalleryFilter::All => "All",
            GalleryFilter::Only(GalleryCategory::MainShop) => "Main Shop",
            GalleryFilter::Only(GalleryCategory::BarXBar) => "barXbar",
            GalleryFilter::Only(GalleryCategory::Haircuts) => "Haircut Styles",
        }
    }

    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(category) => item.category == *category,
        }
    }
}

/// A gallery card. Images are placeholders tinted with `tone`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub id: u32,
    pub category: GalleryCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}

pub static GALLERY_ITEMS: [GalleryItem; 9] = [
    GalleryItem {
        id: 1,
        category: GalleryCategory::MainShop,
        title: "Main Shop Interior",
        description: "The classic, welcoming interior of our main shop location in Manly.",
        tone: Tone::Primary,
    },
    GalleryItem {
        id: 2,
        category: GalleryCategory::MainShop,
        title: "Barber Station",
        description: "Sander's dedicated workspace featuring premium tools and equipment.",
        tone: Tone::Secondary,
    },
    GalleryItem {
        id: 3,
        category: GalleryCategory::BarXBar,
        title: "barXbar Setting",
        description: "Our barXbar location offers a unique atmosphere for your haircut experience.",
        tone: Tone::Accent,
    },
    GalleryItem {
        id: 4,
        category: GalleryCategory::Haircuts,
        title: "Classic Cut",
        description: "A timeless style that works for any occasion.",
        tone: Tone::Primary,
    },
    GalleryItem {
        id: 5,
        category: GalleryCategory::Haircuts,
        title: "Modern Fade",
        description: "Precision graduated fading for a contemporary look.",
        tone: Tone::Secondary,
    },
    GalleryItem {
        id: 6,
        category: GalleryCategory::Haircuts,
        title: "Beard Sculpting",
        description: "Expert beard shaping and styling for a defined look.",
        tone: Tone::Accent,
    },
    GalleryItem {
        id: 7,
        category: GalleryCategory::BarXBar,
        title: "barXbar Interior",
        description: "The vibrant space where our barXbar services are offered.",
        tone: Tone::Primary,
    },
    GalleryItem {
        id: 8,
        category: GalleryCategory::Haircuts,
        title: "Textured Crop",
        description: "A popular style featuring textured top with clean sides.",
        tone: Tone::Secondary,
    },
    GalleryItem {
        id: 9,
        category: GalleryCategory::MainShop,
        title: "Main Shop Exterior",
        description: "The street view of our main shop on Laurence Street.",
        tone: Tone::Accent,
    },
];

/// Look up a gallery item by id
pub fn find_item(id: u32) -> Option<&'static GalleryItem> {
    GALLERY_ITEMS.iter().find(|item| item.id == id)
}

/// Items visible under `filter`, in table order
pub fn filter_items(
    items: &'static [GalleryItem],
    filter: GalleryFilter,
) -> Vec<&'static GalleryItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Filter and lightbox state owned by the gallery page.
///
/// The lightbox holds a reference into the static table rather than into the
/// filtered view, so changing the filter never invalidates or closes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    filter: GalleryFilter,
    lightbox: Option<&'static GalleryItem>,
}

impl GalleryState {
    pub fn filter(&self) -> GalleryFilter {
        self.filter
    }

    pub fn lightbox(&self) -> Option<&'static GalleryItem> {
        self.lightbox
    }

    pub fn set_filter(&mut self, filter: GalleryFilter) {
        self.filter = filter;
    }

    pub fn open_lightbox(&mut self, item: &'static GalleryItem) {
        self.lightbox = Some(item);
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }

    /// Route an overlay activation. Returns whether the lightbox closed.
    pub fn dismiss_lightbox(&mut self, hit: OverlayHit) -> bool {
        if self.lightbox.is_some() && hit.dismisses() {
            self.close_lightbox();
            true
        } else {
            false
        }
    }

    /// Items of the site gallery visible under the current filter
    pub fn visible_items(&self) -> Vec<&'static GalleryItem> {
        self.visible_in(&GALLERY_ITEMS)
    }

    /// Items of `items` visible under the current filter
    pub fn visible_in(&self, items: &'static [GalleryItem]) -> Vec<&'static GalleryItem> {
        filter_items(items, self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&GalleryItem]) -> Vec<u32> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = GalleryState::default();
        assert_eq!(state.filter(), GalleryFilter::All);
        assert!(state.lightbox().is_none());
        assert_eq!(state.visible_items().len(), 9);
    }

    #[test]
    fn test_every_filter_yields_matching_subset() {
        for filter in GalleryFilter::ALL {
            let mut state = GalleryState::default();
            state.set_filter(filter);
            let visible = state.visible_items();

            match filter {
                GalleryFilter::All => assert_eq!(visible.len(), GALLERY_ITEMS.len()),
                GalleryFilter::Only(category) => {
                    let expected = GALLERY_ITEMS
                        .iter()
                        .filter(|item| item.category == category)
                        .count();
                    assert_eq!(visible.len(), expected);
                    assert!(visible.iter().all(|item| item.category == category));
                }
            }
        }
    }

    #[test]
    fn test_category_counts() {
        let count = |c| filter_items(&GALLERY_ITEMS, GalleryFilter::Only(c)).len();
        assert_eq!(count(GalleryCategory::MainShop), 3);
        assert_eq!(count(GalleryCategory::BarXBar), 2);
        assert_eq!(count(GalleryCategory::Haircuts), 4);
    }

    #[test]
    fn test_filter_of_empty_table_is_empty() {
        static EMPTY: [GalleryItem; 0] = [];
        assert!(filter_items(&EMPTY, GalleryFilter::All).is_empty());
        assert!(filter_items(&EMPTY, GalleryFilter::Only(GalleryCategory::Haircuts)).is_empty());
    }

    #[test]
    fn test_open_then_close_keeps_filter() {
        let mut state = GalleryState::default();
        state.set_filter(GalleryFilter::Only(GalleryCategory::BarXBar));
        let item = find_item(3).unwrap();

        state.open_lightbox(item);
        assert_eq!(state.lightbox().map(|i| i.id), Some(3));
        assert_eq!(state.filter(), GalleryFilter::Only(GalleryCategory::BarXBar));

        state.close_lightbox();
        assert!(state.lightbox().is_none());
        assert_eq!(state.filter(), GalleryFilter::Only(GalleryCategory::BarXBar));
    }

    #[test]
    fn test_filter_change_leaves_lightbox_open() {
        let mut state = GalleryState::default();
        state.open_lightbox(find_item(1).unwrap());
        state.set_filter(GalleryFilter::Only(GalleryCategory::Haircuts));

        assert_eq!(state.lightbox().map(|i| i.id), Some(1));
        assert!(!ids(&state.visible_items()).contains(&1));
    }

    #[test]
    fn test_panel_hit_never_dismisses() {
        let mut state = GalleryState::default();
        state.open_lightbox(find_item(5).unwrap());

        assert!(!state.dismiss_lightbox(OverlayHit::Panel));
        assert!(state.lightbox().is_some());

        assert!(state.dismiss_lightbox(OverlayHit::Backdrop));
        assert!(state.lightbox().is_none());
    }

    #[test]
    fn test_close_button_and_escape_dismiss() {
        for hit in [OverlayHit::CloseButton, OverlayHit::Escape] {
            let mut state = GalleryState::default();
            state.open_lightbox(find_item(2).unwrap());
            assert!(state.dismiss_lightbox(hit));
            assert!(state.lightbox().is_none());
        }
    }

    #[test]
    fn test_dismiss_without_lightbox_is_noop() {
        let mut state = GalleryState::default();
        assert!(!state.dismiss_lightbox(OverlayHit::Backdrop));
    }

    #[test]
    fn test_filter_display_and_labels() {
        assert_eq!(GalleryFilter::All.to_string(), "all");
        assert_eq!(
            GalleryFilter::Only(GalleryCategory::MainShop).to_string(),
            "main-shop"
        );
        assert_eq!(
            GalleryFilter::Only(GalleryCategory::Haircuts).label(),
            "Haircut Styles"
        );
        assert_eq!(GalleryCategory::MainShop.badge(), "main shop");
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item(8).map(|i| i.title), Some("Textured Crop"));
        assert!(find_item(42).is_none());
    }
}
