//! The two shop locations, their booking platforms and opening hours.

use chrono::Weekday;
use serde::Serialize;

use super::theme::Tone;

/// Latitude/longitude pair
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Center of the locations map (Manly)
pub const MAP_CENTER: LatLng = LatLng {
    lat: -33.797040371278634,
    lng: 151.28360757273393,
};

/// Initial zoom of the locations map
pub const MAP_ZOOM: u8 = 15;

/// Zoom used when a map shows a single location
pub const FOCUSED_ZOOM: u8 = 17;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// External booking platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Trybe,
    Fresha,
}

impl Platform {
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Trybe => "Trybe",
            Platform::Fresha => "Fresha",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Platform::Trybe => "https://trybe.au/swblends",
            Platform::Fresha => {
                "https://www.fresha.com/a/bar-x-bar-pty-ltd-manly-11-25-wentworth-street-svwlgcbn"
            }
        }
    }
}

/// Opening hours for a single day, `None` when closed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayHours {
    pub day: Weekday,
    pub hours: Option<&'static str>,
}

const fn closed(day: Weekday) -> DayHours {
    DayHours { day, hours: None }
}

const fn open(day: Weekday, hours: &'static str) -> DayHours {
    DayHours {
        day,
        hours: Some(hours),
    }
}

const MAIN_SHOP_HOURS: [DayHours; 7] = [
    closed(Weekday::Mon),
    closed(Weekday::Tue),
    closed(Weekday::Wed),
    closed(Weekday::Thu),
    open(Weekday::Fri, "4:00 PM - 7:00 PM"),
    closed(Weekday::Sat),
    closed(Weekday::Sun),
];

const BARXBAR_HOURS: [DayHours; 7] = [
    open(Weekday::Mon, "9:30 AM - 6:00 PM"),
    open(Weekday::Tue, "9:30 AM - 6:00 PM"),
    open(Weekday::Wed, "9:30 AM - 6:00 PM"),
    open(Weekday::Thu, "9:30 AM - 8:00 PM"),
    open(Weekday::Fri, "8:30 AM - 5:00 PM"),
    open(Weekday::Sat, "7:30 AM - 4:00 PM"),
    open(Weekday::Sun, "9:30 AM - 2:30 PM"),
];

/// Full English day name
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A physical shop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Location {
    MainShop,
    BarXBar,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::MainShop, Location::BarXBar];

    pub fn name(&self) -> &'static str {
        match self {
            Location::MainShop => "Main Shop",
            Location::BarXBar => "barXbar",
        }
    }

    pub fn street(&self) -> &'static str {
        match self {
            Location::MainShop => "16 Laurence Street",
            Location::BarXBar => "11-25 Wentworth Street",
        }
    }

    pub fn suburb(&self) -> &'static str {
        "Manly, Sydney, NSW"
    }

    /// Single-line address
    pub fn address(&self) -> String {
        format!("{}, {}", self.street(), self.suburb())
    }

    pub fn coordinates(&self) -> LatLng {
        match self {
            Location::MainShop => LatLng {
                lat: -33.797605883494896,
                lng: 151.2784535445087,
            },
            Location::BarXBar => LatLng {
                lat: -33.7983078888148,
                lng: 151.28761299686425,
            },
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            Location::MainShop => Platform::Trybe,
            Location::BarXBar => Platform::Fresha,
        }
    }

    pub fn booking_url(&self) -> &'static str {
        self.platform().url()
    }

    /// Label of the primary booking control for this location
    pub fn book_label(&self) -> &'static str {
        match self {
            Location::MainShop => "Book with Sander",
            Location::BarXBar => "Book at barXbar",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Location::MainShop => Tone::Primary,
            Location::BarXBar => Tone::Secondary,
        }
    }

    pub fn hours(&self) -> &'static [DayHours; 7] {
        match self {
            Location::MainShop => &MAIN_SHOP_HOURS,
            Location::BarXBar => &BARXBAR_HOURS,
        }
    }

    /// Days of the week the location is open
    pub fn open_days(&self) -> usize {
        self.hours().iter().filter(|d| d.hours.is_some()).count()
    }

    pub fn availability(&self) -> &'static str {
        match self {
            Location::MainShop => "Available Friday only",
            Location::BarXBar => "Available 7 days a week",
        }
    }

    pub fn hours_summary(&self) -> &'static str {
        match self {
            Location::MainShop => "Fri: 4pm-7pm, Mon-Thur: Closed, Sat-Sun: Closed",
            Location::BarXBar => {
                "Mon-Wed: 9:30am-6pm, Thu: 9:30am-8pm, Fri: 8:30am-5pm, Sat: 7:30am-4pm, Sun: 9:30am-2:30pm"
            }
        }
    }

    pub fn pricing_summary(&self) -> &'static str {
        match self {
            Location::MainShop => "All cuts $30, 30 minutes",
            Location::BarXBar => "See our barXbar menu for pricing",
        }
    }

    /// Pitch shown on the booking page
    pub fn booking_pitch(&self) -> &'static str {
        match self {
            Location::MainShop => {
                "Book with Sander Woodward at our original location in Manly. Experience personalized attention and precision cuts in a classic barbershop environment."
            }
            Location::BarXBar => {
                "Get your cut at our barXbar location. Experience quality haircuts in the vibrant setting of one of Manly's popular establishments."
            }
        }
    }

    /// Description shown on the about page
    pub fn about(&self) -> &'static str {
        match self {
            Location::MainShop => {
                "Our original location offers a relaxed atmosphere with the classic barbershop experience. Comfortable seating, quality cuts, and friendly conversation make this a Manly favorite."
            }
            Location::BarXBar => {
                "Our barXbar location combines great cuts with a vibrant atmosphere. Get a fresh look in this unique setting that brings together quality barbering and Manly's social scene."
            }
        }
    }

    /// Footnote under the hours table
    pub fn hours_note(&self) -> &'static str {
        match self {
            Location::MainShop => "* Sander Woodward is the exclusive barber at our Main Shop location",
            Location::BarXBar => {
                "* Hours at barXbar are subject to venue operating hours and availability"
            }
        }
    }
}

/// Marker handed to the map widget
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapMarker {
    pub name: &'static str,
    pub street: String,
    pub position: LatLng,
    pub booking_url: &'static str,
    pub booking_label: &'static str,
}

impl From<Location> for MapMarker {
    fn from(location: Location) -> Self {
        Self {
            name: location.name(),
            street: format!("{}, Manly", location.street()),
            position: location.coordinates(),
            booking_url: location.booking_url(),
            booking_label: match location {
                Location::MainShop => "Book with Sander",
                Location::BarXBar => "Book here",
            },
        }
    }
}

/// Map configuration serialized into the widget's data attribute
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapConfig {
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: &'static str,
    pub attribution: &'static str,
    pub markers: Vec<MapMarker>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            tile_url: TILE_URL,
            attribution: MAP_ATTRIBUTION,
            markers: Location::ALL.into_iter().map(MapMarker::from).collect(),
        }
    }
}

impl MapConfig {
    /// Map centered on a single location with only its marker
    pub fn focused(location: Location) -> Self {
        Self {
            center: location.coordinates(),
            zoom: FOCUSED_ZOOM,
            markers: vec![MapMarker::from(location)],
            ..Self::default()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_location_has_its_own_platform() {
        assert_eq!(Location::MainShop.platform(), Platform::Trybe);
        assert_eq!(Location::BarXBar.platform(), Platform::Fresha);
        assert_ne!(
            Location::MainShop.booking_url(),
            Location::BarXBar.booking_url()
        );
        assert!(
            Location::ALL
                .iter()
                .all(|l| l.booking_url().starts_with("https://"))
        );
    }

    #[test]
    fn test_hours_cover_the_week_in_order() {
        let week = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for location in Location::ALL {
            let days: Vec<_> = location.hours().iter().map(|d| d.day).collect();
            assert_eq!(days, week);
        }
        assert_eq!(Location::MainShop.open_days(), 1);
        assert_eq!(Location::BarXBar.open_days(), 7);
    }

    #[test]
    fn test_address() {
        assert_eq!(
            Location::MainShop.address(),
            "16 Laurence Street, Manly, Sydney, NSW"
        );
    }

    #[test]
    fn test_map_config_json() {
        let config = MapConfig::default();
        assert_eq!(config.markers.len(), 2);

        let json: serde_json::Value =
            serde_json::from_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(json["zoom"], 15);
        assert_eq!(json["markers"][0]["name"], "Main Shop");
        assert_eq!(json["markers"][1]["booking_label"], "Book here");
        assert_eq!(
            json["markers"][1]["booking_url"],
            Platform::Fresha.url()
        );
    }

    #[test]
    fn test_focused_map() {
        let config = MapConfig::focused(Location::BarXBar);
        assert_eq!(config.center, Location::BarXBar.coordinates());
        assert_eq!(config.zoom, FOCUSED_ZOOM);
        assert_eq!(config.markers.len(), 1);
        assert_eq!(config.markers[0].name, "barXbar");
        assert_eq!(config.tile_url, TILE_URL);
    }

    #[test]
    fn test_markers_near_center() {
        for marker in MapConfig::default().markers {
            assert!((marker.position.lat - MAP_CENTER.lat).abs() < 0.01);
            assert!((marker.position.lng - MAP_CENTER.lng).abs() < 0.01);
        }
    }
}
