//! Page sections backed by the shop data rather than copy tables

pub mod booking;
pub mod contact;
pub mod locations;
pub mod services;

pub use booking::{BookingOptions, PriceLists};
pub use contact::{ContactDetails, OpeningHours};
pub use locations::{HoursTable, LocationsOverview};
pub use services::ServiceMenu;
