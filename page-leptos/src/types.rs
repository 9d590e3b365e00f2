//! Page data types for structuring a resolved landing page.
//!
//! These types are the view model handed to the renderer. They're designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Default-able** - Build partial pages with `..Default::default()`
//!
//! Nothing here does a lookup. The caller resolves slugs into records, picks
//! the headline, and fills a [`LandingPage`].
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{FaqItem, LandingPage};
//!
//! let page = LandingPage {
//!     service_slug: "plumbers".into(),
//!     service_name: "Plumbers".into(),
//!     noun: "Plumbers".into(),
//!     location_slug: "brooklyn".into(),
//!     location_name: "Brooklyn".into(),
//!     headline: "Plumbers in Brooklyn, NYC".into(),
//!     faqs: vec![FaqItem {
//!         question: "Do you offer emergency repairs?".into(),
//!         answer: "Many local plumbers do.".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert_eq!(page.lead_context().location_slug, "brooklyn");
//! ```

use serde::{Deserialize, Serialize};

/// One question/answer pair shown in the FAQ section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    /// Question text (rendered as a heading)
    pub question: String,
    /// Answer text
    pub answer: String,
}

/// Context passed through to the lead-capture modal when it opens.
///
/// Serialized with camelCase keys, matching what the modal script reads
/// from `data-lead-context`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadContext {
    /// Display name of the service (e.g. "Moving Services")
    pub service_name: String,
    /// Service slug (e.g. "moving-companies")
    pub service_slug: String,
    /// Display name of the location
    pub location_name: String,
    /// Location slug
    pub location_slug: String,
}

/// Title/description pair for the document head.
///
/// An empty value (both `None`) means "no metadata", which is what the
/// metadata path yields for unknown slugs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// `<title>` text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `<meta name="description">` content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PageMetadata {
    /// True when neither field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Static asset locations and copy that vary per deployment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageAssets {
    /// Base URL for hero images; `{image_base}/{service_slug}.png`
    pub image_base: String,
    /// Base URL holding one SVG per icon glyph
    pub icon_base: String,
    /// Label of the primary call-to-action button
    pub cta_label: String,
    /// Site name shown next to the page title
    pub site_name: String,
}

impl Default for PageAssets {
    fn default() -> Self {
        Self {
            image_base: "/services".into(),
            icon_base: "/icons".into(),
            cta_label: "Get Free Quotes".into(),
            site_name: "Building Health X".into(),
        }
    }
}

/// A fully resolved landing page for one (service, location) pair.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LandingPage {
    /// Service slug, also keys the hero image and the icon
    pub service_slug: String,
    /// Service display name as stored
    pub service_name: String,
    /// Service name with a trailing "Services" removed
    pub noun: String,
    /// Location slug
    pub location_slug: String,
    /// Location display name
    pub location_name: String,
    /// Selected headline, location already substituted
    pub headline: String,
    /// FAQ entries in stored order
    #[serde(default)]
    pub faqs: Vec<FaqItem>,
    /// Head metadata
    #[serde(default)]
    pub metadata: PageMetadata,
    /// Asset URLs and copy
    #[serde(default)]
    pub assets: PageAssets,
}

impl LandingPage {
    /// Hero image URL for this service.
    pub fn image_src(&self) -> String {
        format!(
            "{}/{}.png",
            self.assets.image_base.trim_end_matches('/'),
            self.service_slug
        )
    }

    /// Hero image alt text.
    pub fn image_alt(&self) -> String {
        format!("{} in {}", self.noun, self.location_name)
    }

    /// Context handed to the lead-capture modal.
    pub fn lead_context(&self) -> LeadContext {
        LeadContext {
            service_name: self.service_name.clone(),
            service_slug: self.service_slug.clone(),
            location_name: self.location_name.clone(),
            location_slug: self.location_slug.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_src_joins_base_and_slug() {
        let page = LandingPage {
            service_slug: "pest-control".into(),
            assets: PageAssets {
                image_base: "https://cdn.example.com/services/".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            page.image_src(),
            "https://cdn.example.com/services/pest-control.png"
        );
    }

    #[test]
    fn lead_context_serializes_camel_case() {
        let ctx = LeadContext {
            service_name: "Moving Services".into(),
            service_slug: "moving-companies".into(),
            location_name: "Astoria".into(),
            location_slug: "astoria".into(),
        };
        let json = serde_json::to_string(&ctx).unwrap();
        assert!(json.contains("\"serviceName\":\"Moving Services\""));
        assert!(json.contains("\"locationSlug\":\"astoria\""));
    }

    #[test]
    fn empty_metadata_serializes_to_empty_object() {
        let meta = PageMetadata::default();
        assert!(meta.is_empty());
        assert_eq!(serde_json::to_string(&meta).unwrap(), "{}");
    }
}
