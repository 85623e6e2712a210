//! # protonord-sitegen
//!
//! Renders every registered page of the ProtoNord site to static HTML.
//!
//! Output follows the file-to-route convention the host serves with:
//! `/` becomes `index.html`, `/shopify` becomes `shopify/index.html`.
//! With `--manifest`, a `manifest.json` listing the generated routes is
//! written alongside the pages.
//!
//! ```bash
//! protonord-sitegen --out build --manifest
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use protonord_site::pages::{PAGES, PageEntry};
use protonord_site::render_page;
use protonord_site::types::PageMeta;
use serde::Serialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "protonord-sitegen")]
#[command(about = "Render the ProtoNord site to static HTML")]
#[command(version)]
struct Args {
    /// Output directory for the rendered site
    #[arg(long, default_value = "build")]
    out: PathBuf,

    /// Also write manifest.json listing the generated routes
    #[arg(long)]
    manifest: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// One generated route in manifest.json.
#[derive(Serialize)]
struct ManifestEntry {
    path: &'static str,
    file: String,
    #[serde(flatten)]
    meta: PageMeta,
}

/// Map a route path to its output file, relative to the output directory.
fn route_to_file(path: &str) -> PathBuf {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

/// Render one page and write it under `out`. Returns the relative file path.
fn write_page(out: &Path, page: &PageEntry) -> Result<PathBuf> {
    let rel = route_to_file(page.path);
    let target = out.join(&rel);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let html = render_page(page);
    fs::write(&target, &html).with_context(|| format!("writing {}", target.display()))?;
    info!(route = page.path, bytes = html.len(), "rendered {}", rel.display());
    Ok(rel)
}

fn run(args: &Args) -> Result<()> {
    let mut manifest = Vec::with_capacity(PAGES.len());
    for page in PAGES {
        let rel = write_page(&args.out, page)?;
        manifest.push(ManifestEntry {
            path: page.path,
            file: rel.display().to_string(),
            meta: page.meta,
        });
    }

    if args.manifest {
        let target = args.out.join("manifest.json");
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&target, json).with_context(|| format!("writing {}", target.display()))?;
        info!("wrote manifest for {} routes", manifest.len());
    }

    info!("site rendered to {}", args.out.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[protonord-sitegen] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_route_maps_to_index() {
        assert_eq!(route_to_file("/"), PathBuf::from("index.html"));
    }

    #[test]
    fn slug_routes_get_their_own_directory() {
        assert_eq!(route_to_file("/shopify"), PathBuf::from("shopify/index.html"));
        assert_eq!(
            route_to_file("/cloud-files"),
            PathBuf::from("cloud-files/index.html")
        );
    }

    #[test]
    fn writes_every_registered_page_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");

        for page in PAGES {
            write_page(dir.path(), page).expect("page written");
        }

        assert!(dir.path().join("index.html").exists());
        assert!(dir.path().join("shopify/index.html").exists());
        assert!(dir.path().join("cloud-files/index.html").exists());
    }

    #[test]
    fn manifest_round_trips_as_json() {
        let entries: Vec<ManifestEntry> = PAGES
            .iter()
            .map(|page| ManifestEntry {
                path: page.path,
                file: route_to_file(page.path).display().to_string(),
                meta: page.meta,
            })
            .collect();

        let json = serde_json::to_string_pretty(&entries).expect("serializes");
        assert!(json.contains("\"path\": \"/\""));
        assert!(json.contains("\"file\": \"shopify/index.html\""));
        assert!(json.contains("ProtoNord - Azure Static Web Apps Demo"));
    }
}
