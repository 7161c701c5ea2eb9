use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{SiteConfig, validate_config_semantics};
use crate::error::{Result, SitemapError};
use crate::mapper::UrlMapper;
use crate::output::SITEMAP_FILE_NAME;
use crate::scanner::{IncludeFilter, SiteScanner};

/// Validated, read-only settings for a single run.
///
/// Building a context performs every check that must pass before the site
/// tree is touched: depth and mask validation, URL presence, and existence
/// of the root directory.
#[derive(Debug)]
pub struct ScanContext {
    root: PathBuf,
    max_depth: usize,
    filter: IncludeFilter,
    mapper: UrlMapper,
}

impl ScanContext {
    /// # Errors
    /// Returns a configuration error for invalid settings, or a precondition
    /// error if the root does not exist or is not a directory.
    pub fn new(site: &SiteConfig) -> Result<Self> {
        validate_config_semantics(site)?;

        let url = site.url.as_deref().ok_or_else(|| {
            SitemapError::Config("no site URL configured; set sitemap.url or pass --url".to_string())
        })?;
        let root = site.root.as_deref().ok_or_else(|| {
            SitemapError::Config("no site root configured; set sitemap.root".to_string())
        })?;

        let filter = IncludeFilter::new(&site.includes)?;
        let root = resolve_root(root)?;
        let mapper = UrlMapper::new(&root, url, &site.index_pages);

        debug!(
            root = %root.display(),
            url = mapper.prefix(),
            includes = ?filter.masks(),
            max_depth = site.max_depth,
            index_pages = ?site.index_pages,
            "scan context ready"
        );

        Ok(Self {
            root,
            max_depth: site.max_depth,
            filter,
            mapper,
        })
    }

    /// Absolute, canonical scan root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub const fn filter(&self) -> &IncludeFilter {
        &self.filter
    }

    #[must_use]
    pub const fn mapper(&self) -> &UrlMapper {
        &self.mapper
    }

    #[must_use]
    pub fn url_prefix(&self) -> &str {
        self.mapper.prefix()
    }

    #[must_use]
    pub const fn scanner(&self) -> SiteScanner<&IncludeFilter> {
        SiteScanner::new(&self.filter, self.max_depth)
    }

    /// Where the sitemap document is written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.root.join(SITEMAP_FILE_NAME)
    }
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.exists() {
        return Err(SitemapError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(SitemapError::RootNotDirectory(root.to_path_buf()));
    }
    Ok(dunce::canonicalize(root)?)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
