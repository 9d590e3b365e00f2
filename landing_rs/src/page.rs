//! Page and metadata entry points.
//!
//! [`LandingRenderer`] owns the injected lookup tables and site config, and
//! is the only place that turns a slug pair into a page. Both entry points do
//! the same lookup; they differ in how a miss is surfaced:
//!
//! - [`LandingRenderer::render_page`] returns [`RecordNotFound`] (a 404)
//! - [`LandingRenderer::generate_metadata`] returns empty [`PageMetadata`]

use tracing::{debug, info};

use page_leptos::types::{FaqItem, LandingPage, PageMetadata};

use crate::catalog::{Catalog, RecordNotFound, Resolved};
use crate::config::{HeadlineSets, SiteConfig};
use crate::headline::strip_services_suffix;

/// A rendered landing page.
#[derive(Clone, Debug)]
pub struct RenderedPage {
    pub headline: String,
    pub metadata: PageMetadata,
    /// Complete HTML document, starting with `<!DOCTYPE html>`
    pub html: String,
}

/// Renders landing pages from immutable catalog and config.
#[derive(Clone, Debug)]
pub struct LandingRenderer {
    catalog: Catalog,
    config: SiteConfig,
    headlines: HeadlineSets,
}

impl LandingRenderer {
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        let headlines = config.headlines.build();
        Self {
            catalog,
            config,
            headlines,
        }
    }

    /// Replace the headline sets built from config.
    pub fn with_headlines(mut self, headlines: HeadlineSets) -> Self {
        self.headlines = headlines;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Headline for a pair, or the missing record.
    pub fn headline(
        &self,
        service_slug: &str,
        location_slug: &str,
    ) -> Result<String, RecordNotFound> {
        let resolved = self.catalog.resolve(service_slug, location_slug)?;
        Ok(self.headline_for(&resolved))
    }

    /// Title and description for a pair; empty when either slug is unknown.
    pub fn generate_metadata(&self, service_slug: &str, location_slug: &str) -> PageMetadata {
        match self.catalog.resolve(service_slug, location_slug) {
            Ok(resolved) => {
                let headline = self.headline_for(&resolved);
                self.metadata_for(&resolved, &headline)
            }
            Err(e) => {
                debug!("No metadata: {}", e);
                PageMetadata::default()
            }
        }
    }

    /// Resolve a pair into the renderer's view model.
    pub fn landing_page(
        &self,
        service_slug: &str,
        location_slug: &str,
    ) -> Result<LandingPage, RecordNotFound> {
        let resolved = self.catalog.resolve(service_slug, location_slug)?;
        let headline = self.headline_for(&resolved);
        let metadata = self.metadata_for(&resolved, &headline);

        Ok(LandingPage {
            service_slug: resolved.service_slug.to_string(),
            service_name: resolved.service.name.clone(),
            noun: strip_services_suffix(&resolved.service.name),
            location_slug: resolved.location_slug.to_string(),
            location_name: resolved.location.name.clone(),
            headline,
            faqs: resolved
                .service
                .faqs
                .iter()
                .map(|faq| FaqItem {
                    question: faq.question.clone(),
                    answer: faq.answer.clone(),
                })
                .collect(),
            metadata,
            assets: self.config.page_assets(),
        })
    }

    /// Render the full page, or report which record is missing.
    pub fn render_page(
        &self,
        service_slug: &str,
        location_slug: &str,
    ) -> Result<RenderedPage, RecordNotFound> {
        let page = self.landing_page(service_slug, location_slug).inspect_err(|e| {
            debug!("Not found: {}", e);
        })?;
        info!(
            service = service_slug,
            location = location_slug,
            "Rendering landing page"
        );
        let html = page_leptos::render_page(&page);
        Ok(RenderedPage {
            headline: page.headline,
            metadata: page.metadata,
            html,
        })
    }

    fn headline_for(&self, resolved: &Resolved<'_>) -> String {
        self.headlines.for_service(resolved.service_slug).select(
            resolved.service_slug,
            &resolved.service.name,
            resolved.location_slug,
            &resolved.location.name,
        )
    }

    fn metadata_for(&self, resolved: &Resolved<'_>, headline: &str) -> PageMetadata {
        let noun = strip_services_suffix(&resolved.service.name).to_lowercase();
        PageMetadata {
            title: Some(format!("{} | {}", headline, self.config.site_name)),
            description: Some(format!(
                "Get connected with {} professionals serving {}.",
                noun, resolved.location.name
            )),
        }
    }
}
