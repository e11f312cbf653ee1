//! Site data and UI state, free of any rendering concerns

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod gallery;
pub mod locations;
pub mod menu;
pub mod motion;
pub mod overlay;
pub mod routes;
pub mod services;
pub mod site;
pub mod theme;
#[cfg(test)]
mod tests;

pub use gallery::{GalleryCategory, GalleryFilter, GalleryItem, GalleryState};
pub use locations::{Location, MapConfig, Platform};
pub use menu::MenuState;
pub use overlay::OverlayHit;
pub use routes::{NAVIGATION, NavigationEntry, Page};
pub use theme::{ThemeTokens, Tone};
