//! Renter research sections.
//!
//! Fixed copy; only the headings carry the location name.

use leptos::prelude::*;

/// What renters look up before moving.
pub const BEFORE_MOVING_TOPICS: &[&str] = &[
    "Apartment building reviews and tenant experiences",
    "Noise or maintenance complaints",
    "Pest history such as bedbugs or mice",
    "Open building violations",
    "Heat and hot water issues",
    "Landlord or management company history",
    "Safety and quality-of-life concerns",
];

/// Records renters check for complaints and violations.
pub const COMPLAINT_RECORDS: &[&str] = &[
    "HPD complaints related to heat, pests, or maintenance",
    "Repeated unresolved violations",
    "Construction permits and active DOB filings",
    "Certificate of Occupancy status",
];

/// Steps for researching one building.
pub const BUILDING_RESEARCH_STEPS: &[&str] = &[
    "Search the building address with “reviews”",
    "Check HPD and DOB records",
    "Review landlord or management history",
    "Confirm Certificate of Occupancy",
];

/// All three research sections, in page order.
#[component]
pub fn ResearchSections(location_name: String) -> impl IntoView {
    let before_moving = format!(
        "What renters in {} usually research before moving",
        location_name
    );
    let complaints = format!(
        "Apartment complaints & violations renters check in {}",
        location_name
    );
    let building = format!(
        "How renters research a specific apartment building in {}",
        location_name
    );

    view! {
        <section class="panel research" data-section="before-moving">
            <h2 class="panel-title">{before_moving}</h2>
            <p class="muted">
                "Before hiring movers or setting up services, many renters research the apartment building itself to avoid surprises after move-in."
            </p>
            <ul class="bullet-list">
                {BEFORE_MOVING_TOPICS.iter().map(|topic| view! { <li>{*topic}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>

        <section class="panel research" data-section="complaints">
            <h2 class="panel-title">{complaints}</h2>
            <ul class="bullet-list">
                {COMPLAINT_RECORDS.iter().map(|record| view! { <li>{*record}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>

        <section class="panel research" data-section="building">
            <h2 class="panel-title">{building}</h2>
            <ol class="step-list">
                {BUILDING_RESEARCH_STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
            </ol>
        </section>
    }
}
