//! The walk → map → emit pipeline behind every sitemap run.

use std::path::PathBuf;

use tracing::info;

use crate::config::SiteConfig;
use crate::context::ScanContext;
use crate::error::Result;
use crate::output::SitemapWriter;
use crate::scanner::FileScanner;

/// What a run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// `skip` was set; nothing was read or written.
    Skipped,
    /// The sitemap was written to `path` with `urls`, in document order.
    Written { path: PathBuf, urls: Vec<String> },
}

/// Scan the site described by `site` and write its `sitemap.xml`.
///
/// Either the whole document is written or an error is returned; a failing
/// run never leaves a partial sitemap behind.
///
/// # Errors
/// Returns an error for invalid settings, a missing root, an unreadable
/// directory, or a failed write.
pub fn generate(site: &SiteConfig) -> Result<GenerateOutcome> {
    if site.skip {
        info!("sitemap generation skipped");
        return Ok(GenerateOutcome::Skipped);
    }

    let context = ScanContext::new(site)?;
    info!(root = %context.root().display(), "generating sitemap");

    let files = context.scanner().scan(context.root())?;
    let urls = context.mapper().map_all(&files)?;

    let path = context.output_path();
    SitemapWriter.write(&urls, &path)?;

    info!(path = %path.display(), urls = urls.len(), "sitemap generated");
    Ok(GenerateOutcome::Written { path, urls })
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
