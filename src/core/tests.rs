#[cfg(test)]
mod tests {
    use crate::core::content::{Section, content_for};
    use crate::core::routes::NOT_FOUND_SUGGESTIONS;
    use crate::core::services::{SERVICES, price_list};
    use crate::core::{
        GalleryCategory, GalleryFilter, GalleryState, Location, MapConfig, MenuState, NAVIGATION,
        OverlayHit, Page,
    };

    #[test]
    fn test_browse_haircuts_then_open_and_close_lightbox() {
        let mut gallery = GalleryState::default();
        assert_eq!(gallery.visible_items().len(), 9);

        gallery.set_filter(GalleryFilter::Only(GalleryCategory::Haircuts));
        let visible = gallery.visible_items();
        let ids: Vec<_> = visible.iter().map(|item| item.id).collect();
        assert_eq!(ids, [4, 5, 6, 8]);

        gallery.open_lightbox(visible[1]);
        assert_eq!(gallery.lightbox().map(|item| item.id), Some(5));

        // Clicking inside the panel keeps it open
        assert!(!gallery.dismiss_lightbox(OverlayHit::Panel));
        assert!(gallery.dismiss_lightbox(OverlayHit::Backdrop));

        assert!(gallery.lightbox().is_none());
        assert_eq!(
            gallery.filter(),
            GalleryFilter::Only(GalleryCategory::Haircuts)
        );
        assert_eq!(gallery.visible_items().len(), 4);
    }

    #[test]
    fn test_unknown_path_offers_three_suggestions() {
        let page = Page::from_path("/nonexistent-page");
        assert_eq!(page, Page::NotFound);
        assert!(content_for(page).is_none());

        let targets: Vec<_> = NOT_FOUND_SUGGESTIONS
            .iter()
            .map(|s| s.page.path())
            .collect();
        assert_eq!(
            targets,
            [Some("/services"), Some("/booking"), Some("/contact")]
        );
    }

    #[test]
    fn test_mobile_navigation_round_trip() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());

        let gallery = NAVIGATION
            .iter()
            .find(|entry| entry.page == Page::Gallery)
            .expect("gallery entry");
        let path = menu.select_navigation(gallery);

        assert!(!menu.is_open());
        assert_eq!(Page::from_path(path), Page::Gallery);
    }

    #[test]
    fn test_navigation_matches_routes() {
        let pages: Vec<_> = NAVIGATION.iter().map(|entry| entry.page).collect();
        assert_eq!(pages, Page::ROUTED);
        for entry in NAVIGATION {
            assert_eq!(Page::from_path(entry.path()), entry.page);
        }
    }

    #[test]
    fn test_booking_page_covers_both_locations() {
        let booking = content_for(Page::Booking).unwrap();
        assert!(
            booking
                .sections
                .iter()
                .any(|s| matches!(s, Section::BookingOptions))
        );

        for location in Location::ALL {
            assert!(!price_list(&SERVICES, location).is_empty());
        }
    }

    #[test]
    fn test_map_markers_book_the_same_platforms_as_pages() {
        let config = MapConfig::default();
        for (marker, location) in config.markers.iter().zip(Location::ALL) {
            assert_eq!(marker.booking_url, location.booking_url());
            assert_eq!(marker.name, location.name());
        }
    }
}
