//! FAQ section.

use leptos::prelude::*;

use super::{Glyph, Icon};
use crate::types::FaqItem;

/// Every FAQ entry of the service, in stored order.
#[component]
pub fn FaqSection(faqs: Vec<FaqItem>, icon_base: String) -> impl IntoView {
    view! {
        <section id="faq" class="panel faq">
            <div class="panel-heading">
                <Icon icon_base=icon_base glyph=Glyph::Question class="icon-accent" />
                <h2 class="panel-title">"Frequently asked questions"</h2>
            </div>

            {faqs.into_iter().enumerate().map(|(idx, faq)| {
                view! {
                    <div class="faq-item" data-faq-index=idx.to_string()>
                        <h4 class="faq-question">{faq.question}</h4>
                        <p class="faq-answer">{faq.answer}</p>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>
    }
}

// Tests live in page-leptos/src/lib.rs via render_page.
