//! Static site build.
//!
//! Renders every (service, location) pair to
//! `<out>/services/<service>/<location>/index.html` and writes
//! `<out>/manifest.json` describing what was produced.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::is_path_safe_slug;
use crate::page::LandingRenderer;

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// One rendered page in the manifest.
#[derive(Clone, Debug, Serialize)]
pub struct ManifestEntry {
    /// URL path, e.g. `/services/plumbers/brooklyn`
    pub path: String,
    pub service: String,
    pub location: String,
    pub title: String,
    pub description: String,
}

/// Result of a build.
#[derive(Debug)]
pub struct BuildSummary {
    pub out_dir: PathBuf,
    pub pages: Vec<ManifestEntry>,
}

/// URL path of a page.
pub fn page_path(service_slug: &str, location_slug: &str) -> String {
    format!("/services/{}/{}", service_slug, location_slug)
}

/// Render all pairs into `out_dir`.
pub fn build_site(renderer: &LandingRenderer, out_dir: &Path) -> Result<BuildSummary> {
    let mut pages = Vec::new();

    for (service, location) in renderer.catalog().pairs() {
        // Catalogs built in code skip the slug check done by `Catalog::load_dir`
        if !is_path_safe_slug(service) || !is_path_safe_slug(location) {
            warn!("Skipping {}: slug is not a safe path segment", page_path(service, location));
            continue;
        }

        let rendered = renderer
            .render_page(service, location)
            .with_context(|| format!("rendering {}", page_path(service, location)))?;

        let dir = out_dir.join("services").join(service).join(location);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating {}", dir.display()))?;
        let file = dir.join("index.html");
        std::fs::write(&file, &rendered.html)
            .with_context(|| format!("writing {}", file.display()))?;
        debug!("Wrote {}", file.display());

        pages.push(ManifestEntry {
            path: page_path(service, location),
            service: service.to_string(),
            location: location.to_string(),
            title: rendered.metadata.title.unwrap_or_default(),
            description: rendered.metadata.description.unwrap_or_default(),
        });
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let manifest = serde_json::to_string_pretty(&pages).context("serializing manifest")?;
    std::fs::write(&manifest_path, manifest)
        .with_context(|| format!("writing {}", manifest_path.display()))?;

    info!(pages = pages.len(), out = %out_dir.display(), "Static build complete");

    Ok(BuildSummary {
        out_dir: out_dir.to_path_buf(),
        pages,
    })
}
