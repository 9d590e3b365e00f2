//! Configuration file support.
//!
//! Loads optional `.bhx/config.toml` from the data directory.
//!
//! ```toml
//! site_name = "Building Health X"
//! image_base = "/services"
//! icon_base = "/icons"
//! cta_label = "Get Free Quotes"
//!
//! [headlines]
//! templates = ["{noun} in {location}, NYC"]
//!
//! [headlines.services]
//! locksmith = ["24/7 {noun} in {location}, NYC"]
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

use crate::headline::HeadlineTemplates;
use page_leptos::types::PageAssets;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Appended to page titles as `"{headline} | {site_name}"`
    pub site_name: String,
    /// Base URL for hero images
    pub image_base: String,
    /// Base URL for icon SVGs
    pub icon_base: String,
    /// Primary call-to-action label
    pub cta_label: String,
    pub headlines: HeadlineConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let assets = PageAssets::default();
        Self {
            site_name: assets.site_name,
            image_base: assets.image_base,
            icon_base: assets.icon_base,
            cta_label: assets.cta_label,
            headlines: HeadlineConfig::default(),
        }
    }
}

/// Headline template overrides
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HeadlineConfig {
    /// Replaces the built-in variants for every service
    pub templates: Option<Vec<String>>,
    /// Per-service variants keyed by service slug
    pub services: BTreeMap<String, Vec<String>>,
}

/// Validated template sets, ready for selection.
#[derive(Debug, Clone, Default)]
pub struct HeadlineSets {
    default: HeadlineTemplates,
    per_service: BTreeMap<String, HeadlineTemplates>,
}

impl HeadlineSets {
    /// Templates for a service: its own set if configured, else the default.
    pub fn for_service(&self, service_slug: &str) -> &HeadlineTemplates {
        self.per_service.get(service_slug).unwrap_or(&self.default)
    }

    pub fn with_service(mut self, service_slug: &str, templates: HeadlineTemplates) -> Self {
        self.per_service.insert(service_slug.to_string(), templates);
        self
    }

    pub fn with_default(mut self, templates: HeadlineTemplates) -> Self {
        self.default = templates;
        self
    }
}

impl HeadlineConfig {
    /// Validate configured sets. Invalid ones are logged and skipped.
    pub fn build(&self) -> HeadlineSets {
        let mut sets = HeadlineSets::default();
        if let Some(templates) = &self.templates {
            match HeadlineTemplates::new(templates.iter().cloned()) {
                Ok(valid) => sets.default = valid,
                Err(e) => warn!("Ignoring headline templates: {}", e),
            }
        }
        for (slug, templates) in &self.services {
            match HeadlineTemplates::new(templates.iter().cloned()) {
                Ok(valid) => {
                    sets.per_service.insert(slug.clone(), valid);
                }
                Err(e) => warn!("Ignoring headline templates for `{}`: {}", slug, e),
            }
        }
        sets
    }
}

impl SiteConfig {
    /// Load config from `.bhx/config.toml` in the given data directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(".bhx").join("config.toml");
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Asset URLs and copy handed to the renderer.
    pub fn page_assets(&self) -> PageAssets {
        PageAssets {
            image_base: self.image_base.clone(),
            icon_base: self.icon_base.clone(),
            cta_label: self.cta_label.clone(),
            site_name: self.site_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headline::DEFAULT_TEMPLATES;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) {
        let dir = temp.path().join(".bhx");
        std::fs::create_dir_all(&dir).expect("create .bhx");
        let mut file = std::fs::File::create(dir.join("config.toml")).expect("create config");
        writeln!(file, "{}", body).expect("write config");
    }

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site_name, "Building Health X");
        assert_eq!(config.image_base, "/services");
        assert_eq!(config.cta_label, "Get Free Quotes");
        assert!(config.headlines.templates.is_none());
        assert!(config.headlines.services.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config.site_name, "Building Health X");
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
site_name = "BHX Staging"
image_base = "https://cdn.example.com/services"

[headlines]
templates = ["{noun} around {location}"]

[headlines.services]
locksmith = ["24/7 {noun} in {location}", "Emergency {noun} for {location}"]
"#,
        );

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.site_name, "BHX Staging");
        assert_eq!(config.image_base, "https://cdn.example.com/services");
        // untouched keys keep their defaults
        assert_eq!(config.icon_base, "/icons");

        let sets = config.headlines.build();
        assert_eq!(sets.for_service("plumbers").len(), 1);
        assert_eq!(sets.for_service("locksmith").len(), 2);
    }

    #[test]
    fn test_invalid_templates_fall_back() {
        let temp = TempDir::new().expect("temp dir");
        write_config(
            &temp,
            r#"
[headlines]
templates = []

[headlines.services]
painters = ["{noun} with no place"]
"#,
        );

        let sets = SiteConfig::load(temp.path()).headlines.build();
        assert_eq!(sets.for_service("plumbers").len(), DEFAULT_TEMPLATES.len());
        assert_eq!(sets.for_service("painters").len(), DEFAULT_TEMPLATES.len());
    }

    #[test]
    fn test_load_broken_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "site_name = [unclosed");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.site_name, "Building Health X");
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        write_config(&temp, "");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.cta_label, "Get Free Quotes");
    }
}
