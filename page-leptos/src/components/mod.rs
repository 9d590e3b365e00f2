//! Leptos UI components for rendering landing pages.
//!
//! Each component is a Leptos `#[component]` function. They are composed
//! by [`LandingDocument`] into a complete HTML page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! ├── Hero
//! │   ├── HeadlineText
//! │   └── OpenModalButton
//! ├── ResearchSections
//! ├── FaqSection
//! └── LeadModal
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use page_leptos::components::{FaqSection, ResearchSections};
//!
//! view! {
//!     <ResearchSections location_name="Astoria".to_string() />
//!     <FaqSection faqs=my_faqs icon_base="/icons".to_string() />
//! }
//! ```

mod document;
mod faq;
mod hero;
mod icons;
mod lead_modal;
mod research;

pub use document::LandingDocument;
pub use faq::FaqSection;
pub use hero::{HeadlineText, Hero, split_on_location};
pub use icons::*;
pub use lead_modal::{LEAD_MODAL_ID, LeadModal, MODAL_SCRIPT, OpenModalButton};
pub use research::{
    BEFORE_MOVING_TOPICS, BUILDING_RESEARCH_STEPS, COMPLAINT_RECORDS, ResearchSections,
};
