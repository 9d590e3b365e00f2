//! # page-leptos
//!
//! Leptos SSR renderer for service/location landing pages.
//!
//! The crate takes a fully resolved [`types::LandingPage`] and produces a
//! complete static HTML document. Lookups, headline selection and metadata
//! live in the caller; this crate only composes markup.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration; one tiny inline
//!   script toggles the lead-capture modal
//! - **Component-Based** - Hero, research sections, FAQ, lead modal
//! - **Type-Safe** - Full Rust type safety from data to HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::{render_page, types::LandingPage};
//!
//! let page = LandingPage {
//!     service_slug: "plumbers".into(),
//!     service_name: "Plumbers".into(),
//!     noun: "Plumbers".into(),
//!     location_slug: "brooklyn".into(),
//!     location_name: "Brooklyn".into(),
//!     headline: "Plumbers in Brooklyn, NYC".into(),
//!     ..Default::default()
//! };
//!
//! let html = render_page(&page);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - View model for one page
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::LandingPage;

/// Render a complete landing page as an HTML document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
pub fn render_page(page: &LandingPage) -> String {
    let doc = view! {
        <LandingDocument page=page.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}
