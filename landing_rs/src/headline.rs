//! Deterministic headline selection.
//!
//! A (service, location) pair always gets the same headline variant: the
//! variant index comes from a DJB2-style xor hash of `"{service}/{location}"`,
//! so renders, builds and restarts agree. The hash is for spreading pairs
//! across variants only. It is not a security primitive and must stay stable,
//! because changing it reshuffles every published headline.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Placeholder replaced with the location display name.
pub const LOCATION_TOKEN: &str = "{location}";
/// Placeholder replaced with the service noun.
pub const NOUN_TOKEN: &str = "{noun}";

/// Built-in variants, in selection order.
pub const DEFAULT_TEMPLATES: [&str; 5] = [
    "{noun} in {location}, NYC",
    "Local {noun} in {location}, NYC With Fast Availability",
    "Compare {noun} Options in {location}, NYC",
    "Get Quotes for {noun} in {location}, NYC",
    "{noun} in {location}, NYC With Clear Next Steps",
];

const HASH_SEED: i32 = 5381;

static SERVICES_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+Services$").expect("SERVICES_SUFFIX regex is valid")
});

/// Invalid headline template set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("headline template set is empty")]
    Empty,
    #[error("headline template `{template}` has {count} `{{location}}` placeholders, expected exactly 1")]
    Placeholder { template: String, count: usize },
}

/// Drop a trailing " Services" (any case, any leading whitespace) and trim.
///
/// ```
/// use bhx_landing::headline::strip_services_suffix;
///
/// assert_eq!(strip_services_suffix("Moving Services"), "Moving");
/// assert_eq!(strip_services_suffix("Cleaning"), "Cleaning");
/// ```
pub fn strip_services_suffix(name: &str) -> String {
    SERVICES_SUFFIX.replace(name, "").trim().to_string()
}

/// Hash over UTF-16 code units: `h = (h * 33) ^ unit` in wrapping `i32`,
/// starting at 5381, returned as the absolute value.
pub fn hash_string(input: &str) -> u32 {
    let h = input.encode_utf16().fold(HASH_SEED, |h, unit| {
        h.wrapping_mul(33) ^ i32::from(unit)
    });
    h.unsigned_abs()
}

/// Key hashed for a pair.
pub fn pair_key(service_slug: &str, location_slug: &str) -> String {
    format!("{}/{}", service_slug, location_slug)
}

/// Variant index for a pair, always `< variants` (zero variants yields 0).
pub fn variant_index(service_slug: &str, location_slug: &str, variants: usize) -> usize {
    if variants == 0 {
        return 0;
    }
    hash_string(&pair_key(service_slug, location_slug)) as usize % variants
}

/// An ordered, validated list of headline templates.
///
/// Each template carries exactly one `{location}` and any number of `{noun}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadlineTemplates {
    templates: Vec<String>,
}

impl Default for HeadlineTemplates {
    fn default() -> Self {
        Self {
            templates: DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl HeadlineTemplates {
    pub fn new<I, S>(templates: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let templates: Vec<String> = templates.into_iter().map(Into::into).collect();
        if templates.is_empty() {
            return Err(TemplateError::Empty);
        }
        for template in &templates {
            let count = template.matches(LOCATION_TOKEN).count();
            if count != 1 {
                return Err(TemplateError::Placeholder {
                    template: template.clone(),
                    count,
                });
            }
        }
        Ok(Self { templates })
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.templates
    }

    /// Pick and fill the variant for a pair.
    pub fn select(
        &self,
        service_slug: &str,
        service_name: &str,
        location_slug: &str,
        location_name: &str,
    ) -> String {
        let noun = strip_services_suffix(service_name);
        let idx = variant_index(service_slug, location_slug, self.templates.len());
        // Noun first, so a location name never gets mistaken for a token.
        self.templates[idx]
            .replace(NOUN_TOKEN, &noun)
            .replace(LOCATION_TOKEN, location_name)
    }
}

/// Headline for a pair using the built-in variants.
///
/// ```
/// use bhx_landing::headline::select_headline;
///
/// let a = select_headline("plumbers", "Plumbers", "brooklyn", "Brooklyn");
/// let b = select_headline("plumbers", "Plumbers", "brooklyn", "Brooklyn");
/// assert_eq!(a, b);
/// assert_eq!(a, "Plumbers in Brooklyn, NYC");
/// ```
pub fn select_headline(
    service_slug: &str,
    service_name: &str,
    location_slug: &str,
    location_name: &str,
) -> String {
    HeadlineTemplates::default().select(service_slug, service_name, location_slug, location_name)
}
