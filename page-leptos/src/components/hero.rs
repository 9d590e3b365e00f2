//! Hero section - image, headline with the location accented, primary CTA.

use leptos::prelude::*;

use super::{OpenModalButton, service_icon};
use crate::types::LandingPage;

/// Split a headline around the first occurrence of the location name.
///
/// Returns `None` when the name is empty or does not occur, in which case the
/// headline is rendered as a single unstyled string.
pub fn split_on_location<'a>(headline: &'a str, location_name: &str) -> Option<(&'a str, &'a str)> {
    if location_name.is_empty() {
        return None;
    }
    headline.split_once(location_name)
}

/// Headline text with the location name wrapped in an accent span.
#[component]
pub fn HeadlineText(headline: String, location_name: String) -> impl IntoView {
    let parts = split_on_location(&headline, &location_name)
        .map(|(before, after)| (before.to_string(), after.to_string()));

    // Empty text parts would render as a stray space inside the <h1>
    match parts {
        Some((before, after)) => match (before.is_empty(), after.is_empty()) {
            (true, true) => view! {
                <span class="headline-accent">{location_name}</span>
            }
            .into_any(),
            (false, true) => view! {
                {before}
                <span class="headline-accent">{location_name}</span>
            }
            .into_any(),
            (true, false) => view! {
                <span class="headline-accent">{location_name}</span>
                {after}
            }
            .into_any(),
            (false, false) => view! {
                {before}
                <span class="headline-accent">{location_name}</span>
                {after}
            }
            .into_any(),
        },
        None => view! { {headline} }.into_any(),
    }
}

/// Top of the page: hero image, `<h1>` and the "get quotes" trigger.
#[component]
pub fn Hero(page: LandingPage) -> impl IntoView {
    let glyph = service_icon(&page.service_slug);
    let image_src = page.image_src();
    let image_alt = page.image_alt();

    view! {
        <section class="hero">
            <div class="hero-media">
                <img class="hero-image" src=image_src alt=image_alt loading="eager" />
                <div class="hero-overlay"></div>
            </div>

            <h1 class="hero-title">
                <HeadlineText headline=page.headline location_name=page.location_name />
            </h1>

            <OpenModalButton
                label=page.assets.cta_label
                icon_base=page.assets.icon_base
                glyph=glyph
            />
        </section>
    }
}
