//! Configuration semantic validation.
//!
//! Runs after parsing and before any traversal, so a bad setting aborts the
//! run without touching the site tree.

use crate::config::SiteConfig;
use crate::scanner::validate_mask;
use crate::{Result, SitemapError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if `max_depth` is zero, an include mask or index page
/// name is malformed, or the URL is blank.
pub fn validate_config_semantics(site: &SiteConfig) -> Result<()> {
    if site.max_depth == 0 {
        return Err(SitemapError::Config(
            "sitemap.max_depth must be at least 1, got 0".to_string(),
        ));
    }

    for mask in &site.includes {
        validate_mask(mask)?;
    }

    for (i, name) in site.index_pages.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(SitemapError::Config(format!(
                "sitemap.index_pages[{i}] must not be empty"
            )));
        }
        if name.contains(['/', '\\']) {
            return Err(SitemapError::Config(format!(
                "sitemap.index_pages[{i}] must be a file name, got '{name}'"
            )));
        }
    }

    if let Some(url) = &site.url
        && url.trim().is_empty()
    {
        return Err(SitemapError::Config(
            "sitemap.url must not be empty".to_string(),
        ));
    }

    Ok(())
}
