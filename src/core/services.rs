//! Service menu with per-location pricing.

use super::locations::Location;

/// Value that differs between the two locations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerLocation<T> {
    pub main_shop: T,
    pub barxbar: T,
}

impl<T: Copy> PerLocation<T> {
    pub fn at(&self, location: Location) -> T {
        match location {
            Location::MainShop => self.main_shop,
            Location::BarXBar => self.barxbar,
        }
    }
}

/// A service on the menu
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: PerLocation<&'static str>,
    pub price: PerLocation<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub static SERVICES: [ServiceOffering; 5] = [
    ServiceOffering {
        id: "haircut",
        name: "Haircut",
        duration: PerLocation {
            main_shop: "30 mins",
            barxbar: "30 mins - 45 mins",
        },
        price: PerLocation {
            main_shop: "$30",
            barxbar: "from $50",
        },
        description: "Our standard haircut service includes a consultation, precision cut, and styling to suit your face shape and personal style.",
        features: &[
            "Consultation with your barber",
            "Precision scissor cut",
            "Classic styling",
            "Product recommendations",
        ],
    },
    ServiceOffering {
        id: "buzz",
        name: "Buzz Cuts",
        duration: PerLocation {
            main_shop: "30 mins",
            barxbar: "30 mins - 45 mins",
        },
        price: PerLocation {
            main_shop: "$30",
            barxbar: "from $40",
        },
        description: "Quick and efficient buzz cuts with various guard lengths to achieve your desired short style.",
        features: &[
            "Consultation on length",
            "Even, all-over cut",
            "Clean neckline",
            "Edge detailing",
        ],
    },
    ServiceOffering {
        id: "highschool",
        name: "High School Cut",
        duration: PerLocation {
            main_shop: "30 mins",
            barxbar: "30 mins",
        },
        price: PerLocation {
            main_shop: "$30",
            barxbar: "from $40",
        },
        description: "Tailored cuts for students with styles that are both age-appropriate and on-trend.",
        features: &[
            "Student-friendly styles",
            "Clean lines",
            "Low-maintenance options",
            "Styling tips for daily wear",
        ],
    },
    ServiceOffering {
        id: "concession",
        name: "Concession Cuts",
        duration: PerLocation {
            main_shop: "30 mins",
            barxbar: "30 mins",
        },
        price: PerLocation {
            main_shop: "$30",
            barxbar: "from $45",
        },
        description: "Special rate cuts for seniors, veterans, and other concession card holders.",
        features: &[
            "Classic or modern styles",
            "Attention to specific needs",
            "Relaxed service",
            "Expert advice",
        ],
    },
    ServiceOffering {
        id: "beard",
        name: "Beard Fade / Sculpt",
        duration: PerLocation {
            main_shop: "30 mins",
            barxbar: "30 mins",
        },
        price: PerLocation {
            main_shop: "$30",
            barxbar: "from $45",
        },
        description: "Expert beard styling with precise fading and shaping for a well-defined, structured look.",
        features: &[
            "Beard line definition",
            "Graduated fading technique",
            "Shape customization",
            "Maintenance tips",
        ],
    },
];

/// One row of a location's price list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceLine {
    pub name: &'static str,
    pub price: &'static str,
    pub duration: &'static str,
}

/// Price list for `location`.
///
/// When every offering costs the same and takes the same time at a location
/// the list collapses into one "All Haircuts" row.
pub fn price_list(services: &[ServiceOffering], location: Location) -> Vec<PriceLine> {
    let Some(first) = services.first() else {
        return Vec::new();
    };

    let price = first.price.at(location);
    let duration = first.duration.at(location);
    let flat_rate = services
        .iter()
        .all(|s| s.price.at(location) == price && s.duration.at(location) == duration);

    if flat_rate && services.len() > 1 {
        return vec![PriceLine {
            name: "All Haircuts",
            price,
            duration,
        }];
    }

    services
        .iter()
        .map(|s| PriceLine {
            name: s.name,
            price: s.price.at(location),
            duration: s.duration.at(location),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_table_shape() {
        assert_eq!(SERVICES.len(), 5);
        for service in &SERVICES {
            assert_eq!(service.features.len(), 4, "{}", service.id);
            assert!(!service.description.is_empty());
        }
    }

    #[test]
    fn test_main_shop_collapses_to_flat_rate() {
        let lines = price_list(&SERVICES, Location::MainShop);
        assert_eq!(
            lines,
            vec![PriceLine {
                name: "All Haircuts",
                price: "$30",
                duration: "30 mins",
            }]
        );
    }

    #[test]
    fn test_barxbar_lists_every_service() {
        let lines = price_list(&SERVICES, Location::BarXBar);
        let names: Vec<_> = lines.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            [
                "Haircut",
                "Buzz Cuts",
                "High School Cut",
                "Concession Cuts",
                "Beard Fade / Sculpt"
            ]
        );
        assert_eq!(lines[0].price, "from $50");
    }

    #[test]
    fn test_empty_menu() {
        assert!(price_list(&[], Location::MainShop).is_empty());
    }

    #[test]
    fn test_per_location_lookup() {
        let service = &SERVICES[1];
        assert_eq!(service.price.at(Location::MainShop), "$30");
        assert_eq!(service.price.at(Location::BarXBar), "from $40");
    }
}
