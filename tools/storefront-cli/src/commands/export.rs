//! Static export of every page.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::catalog::Catalog;
use storefront_core::Route;
use storefront_site::Site;

use super::ExportArgs;
use crate::context::Context;
use crate::output::format_bytes;

/// One file written by an export.
#[derive(Debug, Serialize)]
pub struct ExportedFile {
    /// Route name, or `not-found` for the 404 page.
    pub page: &'static str,
    pub path: PathBuf,
    pub bytes: u64,
}

/// Run the export command.
pub fn run(args: ExportArgs, ctx: &Context) -> Result<()> {
    let out = ctx.resolve_path(&args.out);
    let site = Site::new(ctx.config.clone(), Catalog::sample()).context("Invalid site config")?;

    ctx.output.header(&format!("Exporting {}", site.config().brand));
    ctx.output.debug(&format!("Output directory: {}", out.display()));

    let files = export_site(&site, &out, !args.no_404)?;

    if ctx.output.is_json() {
        ctx.output.json(&files);
        return Ok(());
    }

    for file in &files {
        ctx.output.kv(file.page, &format!("{} ({})", file.path.display(), format_bytes(file.bytes)));
    }
    ctx.output
        .success(&format!("Exported {} files to {}", files.len(), out.display()));

    Ok(())
}

/// Render every page route into `out`, plus `404.html` when asked.
pub fn export_site(site: &Site, out: &Path, include_404: bool) -> Result<Vec<ExportedFile>> {
    let mut files = Vec::new();

    for route in Route::PAGES {
        let Some(relative) = route.export_path() else {
            continue;
        };
        let html = site
            .render(route)
            .with_context(|| format!("Failed to render {}", route.path()))?;
        files.push(write_page(out, relative, route.name(), &html)?);
    }

    if include_404 {
        let html = site.not_found("/404").to_html();
        files.push(write_page(out, "404.html", "not-found", &html)?);
    }

    Ok(files)
}

fn write_page(out: &Path, relative: &str, page: &'static str, html: &str) -> Result<ExportedFile> {
    let path = out.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(page, path = %path.display(), bytes = html.len(), "page exported");

    Ok(ExportedFile {
        page,
        path,
        bytes: html.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::SiteConfig;

    fn temp_out(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("storefront-export-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_export_writes_every_page() {
        let out = temp_out("all");
        let site = Site::new(SiteConfig::default(), Catalog::sample()).unwrap();

        let files = export_site(&site, &out, true).unwrap();
        let pages: Vec<_> = files.iter().map(|f| f.page).collect();
        assert_eq!(pages, vec!["home", "privacy", "terms", "returns", "not-found"]);

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.starts_with("<!DOCTYPE html>"));
        assert!(out.join("privacy/index.html").is_file());
        assert!(out.join("terms/index.html").is_file());
        assert!(out.join("returns/index.html").is_file());

        let not_found = fs::read_to_string(out.join("404.html")).unwrap();
        assert!(not_found.contains("noindex, nofollow"));

        fs::remove_dir_all(&out).unwrap();
    }

    #[test]
    fn test_export_without_404() {
        let out = temp_out("no404");
        let site = Site::new(SiteConfig::default(), Catalog::sample()).unwrap();

        let files = export_site(&site, &out, false).unwrap();
        assert_eq!(files.len(), Route::PAGES.len());
        assert!(!out.join("404.html").exists());

        fs::remove_dir_all(&out).unwrap();
    }
}
