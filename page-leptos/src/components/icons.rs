//! Service icons.
//!
//! Every service slug maps to one [`Glyph`]; unknown slugs get
//! [`Glyph::Wrench`]. Glyph artwork lives outside this crate as one SVG file
//! per glyph under [`PageAssets::icon_base`](crate::types::PageAssets), so the
//! renderer only emits `<img>` references.

use leptos::prelude::*;

/// A single icon glyph.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Truck,
    Package,
    Archive,
    Trash,
    Sparkle,
    House,
    ClipboardCheck,
    Shield,
    Wifi,
    Key,
    Wrench,
    PaintBucket,
    Bug,
    Thermometer,
    Drop,
    Lightning,
    WarningOctagon,
    Question,
}

impl Glyph {
    /// File stem of the glyph's SVG.
    pub fn id(self) -> &'static str {
        match self {
            Glyph::Truck => "truck",
            Glyph::Package => "package",
            Glyph::Archive => "archive",
            Glyph::Trash => "trash",
            Glyph::Sparkle => "sparkle",
            Glyph::House => "house",
            Glyph::ClipboardCheck => "clipboard-check",
            Glyph::Shield => "shield",
            Glyph::Wifi => "wifi",
            Glyph::Key => "key",
            Glyph::Wrench => "wrench",
            Glyph::PaintBucket => "paint-bucket",
            Glyph::Bug => "bug",
            Glyph::Thermometer => "thermometer",
            Glyph::Drop => "drop",
            Glyph::Lightning => "lightning",
            Glyph::WarningOctagon => "warning-octagon",
            Glyph::Question => "question",
        }
    }

    /// URL of the glyph under `icon_base`.
    pub fn src(self, icon_base: &str) -> String {
        format!("{}/{}.svg", icon_base.trim_end_matches('/'), self.id())
    }
}

/// Icon for a service slug, [`Glyph::Wrench`] when the slug is not listed.
pub fn service_icon(service_slug: &str) -> Glyph {
    match service_slug {
        "moving-companies" => Glyph::Truck,
        "packing-services" => Glyph::Package,
        "storage-facilities" => Glyph::Archive,
        "junk-removal" => Glyph::Trash,
        "cleaning-services" => Glyph::Sparkle,
        "real-estate-agents" => Glyph::House,
        "building-inspectors" => Glyph::ClipboardCheck,
        "renters-insurance" => Glyph::Shield,
        "internet-providers" => Glyph::Wifi,
        "locksmith" => Glyph::Key,
        "furniture-assembly" => Glyph::Wrench,
        "painters" => Glyph::PaintBucket,
        "pest-control" => Glyph::Bug,
        "hvac-repair" => Glyph::Thermometer,
        "plumbers" => Glyph::Drop,
        "electricians" => Glyph::Lightning,
        "mold-remediation" => Glyph::WarningOctagon,
        _ => Glyph::Wrench,
    }
}

/// Renders a glyph as a decorative `<img>`.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon icon_base="/icons".to_string() glyph=Glyph::Truck class="icon-sm" /> }
/// ```
#[component]
pub fn Icon(
    /// Base URL holding the glyph SVGs
    icon_base: String,
    glyph: Glyph,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let class = if class.is_empty() {
        "icon".to_string()
    } else {
        format!("icon {}", class)
    };
    view! {
        <img
            class=class
            src=glyph.src(&icon_base)
            width=size
            height=size
            alt=""
            aria-hidden="true"
            data-glyph=glyph.id()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slugs_map_to_their_glyph() {
        assert_eq!(service_icon("plumbers"), Glyph::Drop);
        assert_eq!(service_icon("electricians"), Glyph::Lightning);
        assert_eq!(service_icon("moving-companies"), Glyph::Truck);
        assert_eq!(service_icon("mold-remediation"), Glyph::WarningOctagon);
    }

    #[test]
    fn unknown_slug_falls_back_to_wrench() {
        assert_eq!(service_icon("chimney-sweeps"), Glyph::Wrench);
        assert_eq!(service_icon(""), Glyph::Wrench);
    }

    #[test]
    fn src_trims_trailing_slash() {
        assert_eq!(Glyph::Bug.src("/icons/"), "/icons/bug.svg");
        assert_eq!(Glyph::Key.src("/icons"), "/icons/key.svg");
    }
}
