//! Root document component - the complete HTML page.

use super::{FaqSection, Hero, LeadModal, MODAL_SCRIPT, ResearchSections};
use crate::styles::PAGE_CSS;
use crate::types::LandingPage;
use leptos::prelude::*;

/// The complete HTML document for one landing page
#[component]
pub fn LandingDocument(page: LandingPage) -> impl IntoView {
    // Without metadata the headline still makes a usable title
    let title = page
        .metadata
        .title
        .clone()
        .unwrap_or_else(|| page.headline.clone());
    // No placeholder in <head> when there is no description
    let description_meta = match page.metadata.description.clone() {
        Some(content) => view! { <meta name="description" content=content /> }.into_any(),
        None => ().into_any(),
    };
    let lead_context = page.lead_context();
    let location_name = page.location_name.clone();
    let faqs = page.faqs.clone();
    let icon_base = page.assets.icon_base.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                {description_meta}
                <style>{PAGE_CSS}</style>
            </head>
            <body class="page">
                <main class="page-main">
                    <div class="container">
                        <Hero page=page />
                        <ResearchSections location_name=location_name />
                        <FaqSection faqs=faqs icon_base=icon_base />
                    </div>
                </main>

                <LeadModal context=lead_context />
                <script>{MODAL_SCRIPT}</script>
            </body>
        </html>
    }
}
