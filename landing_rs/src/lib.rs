//! # bhx-landing
//!
//! **Service × location landing pages** for Building Health X.
//!
//! Given a service slug (`plumbers`) and a location slug (`brooklyn`), the
//! crate looks up both records, picks a headline variant deterministically,
//! and renders a static HTML page through [`page_leptos`].
//!
//! ## Features
//!
//! - **Stable headlines** - Same pair, same headline, across builds and restarts
//! - **Injected data** - Lookup tables are passed in, never global
//! - **Static builds** - Every pair rendered to a directory tree with a manifest
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use bhx_landing::catalog::{Catalog, Faq, LocationRecord, ServiceRecord};
//! use bhx_landing::config::SiteConfig;
//! use bhx_landing::page::LandingRenderer;
//!
//! let mut services = BTreeMap::new();
//! services.insert("plumbers".to_string(), ServiceRecord {
//!     name: "Plumbers".into(),
//!     faqs: vec![Faq::new("Are quotes free?", "Yes.")],
//! });
//! let mut locations = BTreeMap::new();
//! locations.insert("brooklyn".to_string(), LocationRecord { name: "Brooklyn".into() });
//!
//! let renderer = LandingRenderer::new(Catalog::new(services, locations), SiteConfig::default());
//!
//! let page = renderer.render_page("plumbers", "brooklyn").unwrap();
//! assert_eq!(page.headline, "Plumbers in Brooklyn, NYC");
//! assert!(renderer.render_page("plumbers-typo", "brooklyn").is_err());
//! assert!(renderer.generate_metadata("plumbers-typo", "brooklyn").is_empty());
//! ```
//!
//! ## CLI Usage
//!
//! ```bash
//! bhx render plumbers brooklyn          # HTML to stdout
//! bhx meta plumbers brooklyn            # {"title": ..., "description": ...}
//! bhx build -o dist                     # every pair + manifest.json
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Slug-keyed service and location records, loaded from JSON or built in code.
pub mod catalog;

/// Site configuration (`.bhx/config.toml`).
pub mod config;

/// Deterministic headline selection.
///
/// # Example
///
/// ```rust
/// use bhx_landing::headline::{select_headline, variant_index};
///
/// assert_eq!(variant_index("plumbers", "astoria", 5), 2);
/// assert_eq!(
///     select_headline("plumbers", "Plumbers", "astoria", "Astoria"),
///     "Compare Plumbers Options in Astoria, NYC"
/// );
/// ```
pub mod headline;

/// Page and metadata entry points.
pub mod page;

/// Static site build.
pub mod site;

// ============================================================================
// CLI
// ============================================================================

/// `bhx` argument parsing and dispatch.
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use catalog::{Catalog, RecordNotFound};
pub use config::SiteConfig;
pub use page::{LandingRenderer, RenderedPage};
