//! `bhx` command line.
//!
//! Thin layer over [`LandingRenderer`]: parse arguments, load catalog and
//! config, dispatch, and map outcomes to exit codes.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::catalog::{Catalog, RecordNotFound};
use crate::config::SiteConfig;
use crate::page::LandingRenderer;
use crate::site::build_site;

/// Exit code for a slug with no record (the CLI's 404).
pub const EXIT_NOT_FOUND: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "bhx")]
#[command(about = "Render Building Health X service/location landing pages")]
#[command(version)]
pub struct Args {
    /// Data directory holding services.json and locations.json
    #[arg(long, global = true, default_value = "data")]
    pub data: PathBuf,

    /// Config file (default: <DATA>/.bhx/config.toml, optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one page as HTML
    Render {
        service: String,
        location: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print page metadata as JSON ({} when a slug is unknown)
    Meta { service: String, location: String },
    /// Print the selected headline
    Headline { service: String, location: String },
    /// Render every service/location pair to a directory
    Build {
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,
    },
    /// List service and location slugs
    List,
}

fn init_tracing(level: &str) {
    // Logs go to stderr; stdout carries page output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

fn load_renderer(args: &Args) -> Result<LandingRenderer> {
    let catalog = Catalog::load_dir(&args.data)
        .with_context(|| format!("loading catalog from {}", args.data.display()))?;
    let config = match &args.config {
        Some(path) => SiteConfig::load_from_path(path),
        None => SiteConfig::load(&args.data),
    };
    Ok(LandingRenderer::new(catalog, config))
}

fn not_found(err: &RecordNotFound) -> ExitCode {
    eprintln!("[bhx] not found: {}", err);
    ExitCode::from(EXIT_NOT_FOUND)
}

fn write_stdout(text: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes()).context("writing to stdout")?;
    if !text.ends_with('\n') {
        out.write_all(b"\n").context("writing to stdout")?;
    }
    Ok(())
}

/// Execute parsed arguments.
pub fn execute(args: Args) -> Result<ExitCode> {
    let renderer = load_renderer(&args)?;

    match args.command {
        Command::Render {
            service,
            location,
            output,
        } => {
            let page = match renderer.render_page(&service, &location) {
                Ok(page) => page,
                Err(e) => return Ok(not_found(&e)),
            };
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("creating {}", parent.display()))?;
                    }
                    std::fs::write(&path, &page.html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => write_stdout(&page.html)?,
            }
        }
        Command::Meta { service, location } => {
            let meta = renderer.generate_metadata(&service, &location);
            let json = serde_json::to_string_pretty(&meta).context("serializing metadata")?;
            write_stdout(&json)?;
        }
        Command::Headline { service, location } => match renderer.headline(&service, &location) {
            Ok(headline) => write_stdout(&headline)?,
            Err(e) => return Ok(not_found(&e)),
        },
        Command::Build { output } => {
            let summary = build_site(&renderer, &output)?;
            eprintln!(
                "[bhx] built {} pages into {}",
                summary.pages.len(),
                summary.out_dir.display()
            );
        }
        Command::List => {
            let catalog = renderer.catalog();
            let mut listing = String::from("services:\n");
            for (slug, record) in catalog.services() {
                listing.push_str(&format!("  {}\t{}\n", slug, record.name));
            }
            listing.push_str("locations:\n");
            for (slug, record) in catalog.locations() {
                listing.push_str(&format!("  {}\t{}\n", slug, record.name));
            }
            write_stdout(&listing)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Binary entry point: parse, set up logging, run, report errors.
pub fn run() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[bhx] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_render_with_global_flags() {
        let args = Args::parse_from([
            "bhx",
            "render",
            "plumbers",
            "brooklyn",
            "--data",
            "fixtures",
            "-o",
            "out.html",
        ]);
        assert_eq!(args.data, PathBuf::from("fixtures"));
        match args.command {
            Command::Render {
                service,
                location,
                output,
            } => {
                assert_eq!(service, "plumbers");
                assert_eq!(location, "brooklyn");
                assert_eq!(output, Some(PathBuf::from("out.html")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn build_defaults_to_dist() {
        let args = Args::parse_from(["bhx", "build"]);
        assert_eq!(args.data, PathBuf::from("data"));
        assert_eq!(args.log_level, "warn");
        assert!(matches!(args.command, Command::Build { output } if output == PathBuf::from("dist")));
    }
}
