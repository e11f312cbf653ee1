pub mod common;
pub mod content;
pub mod gallery;
pub mod icon;
pub mod layout;
pub mod map;
pub mod motion;
pub mod pages;
pub mod sections;
pub mod splash;

pub use icon::{Icon, icons};
