//! Service and location lookup tables.
//!
//! A [`Catalog`] is built once (in code or from a data directory) and then
//! only read. Lookups are exact slug matches.
//!
//! # Data files
//!
//! `services.json`:
//!
//! ```json
//! { "plumbers": { "name": "Plumbers", "faqs": [ { "q": "…", "a": "…" } ] } }
//! ```
//!
//! `locations.json`:
//!
//! ```json
//! { "brooklyn": { "name": "Brooklyn" } }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// File name of the service table inside a data directory.
pub const SERVICES_FILE: &str = "services.json";
/// File name of the location table inside a data directory.
pub const LOCATIONS_FILE: &str = "locations.json";

/// One FAQ entry attached to a service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "q", alias = "question")]
    pub question: String,
    #[serde(rename = "a", alias = "answer")]
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Static data for one service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Display name, e.g. "Moving Services"
    pub name: String,
    /// FAQ entries in display order
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

/// Static data for one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Display name, e.g. "Upper West Side"
    pub name: String,
}

/// Which lookup table a slug was missing from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Service,
    Location,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Service => f.write_str("service"),
            RecordKind::Location => f.write_str("location"),
        }
    }
}

/// A slug with no matching record. Terminal for the page.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("no {kind} record for slug `{slug}`")]
pub struct RecordNotFound {
    pub kind: RecordKind,
    pub slug: String,
}

impl RecordNotFound {
    pub fn service(slug: &str) -> Self {
        Self {
            kind: RecordKind::Service,
            slug: slug.to_string(),
        }
    }

    pub fn location(slug: &str) -> Self {
        Self {
            kind: RecordKind::Location,
            slug: slug.to_string(),
        }
    }
}

/// Failure loading catalog files from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid slug `{slug}` in {path}: slugs become path segments")]
    InvalidSlug { path: PathBuf, slug: String },
}

/// True when `slug` can be used as a single path segment.
///
/// Rejects empty slugs, `.`/`..` and anything containing a path separator.
pub fn is_path_safe_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && !slug.contains("..") && !slug.contains(['/', '\\'])
}

/// Immutable slug-keyed service and location tables.
///
/// Ordered maps keep listing and static builds sorted by slug.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    services: BTreeMap<String, ServiceRecord>,
    locations: BTreeMap<String, LocationRecord>,
}

/// A service/location pair resolved from the catalog.
#[derive(Clone, Copy, Debug)]
pub struct Resolved<'a> {
    pub service_slug: &'a str,
    pub service: &'a ServiceRecord,
    pub location_slug: &'a str,
    pub location: &'a LocationRecord,
}

impl Catalog {
    pub fn new(
        services: BTreeMap<String, ServiceRecord>,
        locations: BTreeMap<String, LocationRecord>,
    ) -> Self {
        Self {
            services,
            locations,
        }
    }

    /// Load `services.json` and `locations.json` from a data directory.
    pub fn load_dir(dir: &Path) -> Result<Self, CatalogError> {
        let services = read_table(&dir.join(SERVICES_FILE))?;
        let locations = read_table(&dir.join(LOCATIONS_FILE))?;
        let catalog = Self::new(services, locations);
        debug!(
            services = catalog.services.len(),
            locations = catalog.locations.len(),
            dir = %dir.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn service(&self, slug: &str) -> Option<&ServiceRecord> {
        self.services.get(slug)
    }

    pub fn location(&self, slug: &str) -> Option<&LocationRecord> {
        self.locations.get(slug)
    }

    /// Look up both records. The service is checked first.
    pub fn resolve<'a>(
        &'a self,
        service_slug: &'a str,
        location_slug: &'a str,
    ) -> Result<Resolved<'a>, RecordNotFound> {
        let service = self
            .service(service_slug)
            .ok_or_else(|| RecordNotFound::service(service_slug))?;
        let location = self
            .location(location_slug)
            .ok_or_else(|| RecordNotFound::location(location_slug))?;
        Ok(Resolved {
            service_slug,
            service,
            location_slug,
            location,
        })
    }

    pub fn services(&self) -> impl Iterator<Item = (&str, &ServiceRecord)> {
        self.services.iter().map(|(slug, rec)| (slug.as_str(), rec))
    }

    pub fn locations(&self) -> impl Iterator<Item = (&str, &LocationRecord)> {
        self.locations.iter().map(|(slug, rec)| (slug.as_str(), rec))
    }

    /// Every (service slug, location slug) pair, services outer.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.services.keys().flat_map(move |service| {
            self.locations
                .keys()
                .map(move |location| (service.as_str(), location.as_str()))
        })
    }
}

fn read_table<T: for<'de> Deserialize<'de>>(
    path: &Path,
) -> Result<BTreeMap<String, T>, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let table: BTreeMap<String, T> =
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if let Some(slug) = table.keys().find(|slug| !is_path_safe_slug(slug)) {
        return Err(CatalogError::InvalidSlug {
            path: path.to_path_buf(),
            slug: slug.clone(),
        });
    }
    Ok(table)
}
