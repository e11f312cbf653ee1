//! Common reusable UI components
//!
//! Buttons, the modal shell, the FAQ accordion and the section scaffolding
//! shared by every page.

pub mod button;
pub mod faq;
pub mod modal;
pub mod section;

pub use button::{BookButton, ButtonSize, ExternalButton, LinkButton};
pub use faq::{FaqItem, FaqList};
pub use modal::BaseModal;
pub use section::{CtaSection, PageFrame, PageHero, PageSection, SectionHeading};
