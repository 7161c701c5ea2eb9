//! Filesystem path to public URL mapping.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SitemapError};

/// Index file name collapsed when no index pages are configured.
pub const DEFAULT_INDEX_PAGE: &str = "index.html";

/// Strip every trailing `/` so that `prefix + "/" + path` never doubles a slash.
#[must_use]
pub fn normalize_url_prefix(prefix: &str) -> String {
    prefix.trim_end_matches('/').to_string()
}

/// Maps files below a site root to public URLs.
///
/// Files named like a configured index page stand for their directory:
/// `docs/index.html` maps to `{prefix}/docs/`.
#[derive(Debug, Clone)]
pub struct UrlMapper {
    root: PathBuf,
    prefix: String,
    index_pages: BTreeSet<String>,
}

impl UrlMapper {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, prefix: &str, index_pages: &[String]) -> Self {
        Self {
            root: root.into(),
            prefix: normalize_url_prefix(prefix),
            index_pages: index_pages.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn is_index_page(&self, name: &str) -> bool {
        self.index_pages.contains(name)
    }

    /// Map one file path to its URL.
    ///
    /// # Errors
    /// Returns an error if `path` is not located under the site root, or if a
    /// component is not valid UTF-8.
    pub fn map(&self, path: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| self.outside_root(path))?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(name) => {
                    let segment = name
                        .to_str()
                        .ok_or_else(|| SitemapError::NonUtf8Path(path.to_path_buf()))?;
                    segments.push(segment);
                }
                Component::CurDir => {}
                _ => return Err(self.outside_root(path)),
            }
        }

        let Some(file_name) = segments.pop() else {
            return Err(self.outside_root(path));
        };

        let mut url = self.prefix.clone();
        for segment in &segments {
            url.push('/');
            url.push_str(segment);
        }
        url.push('/');
        if !self.is_index_page(file_name) {
            url.push_str(file_name);
        }
        Ok(url)
    }

    /// Map every path, keeping their order.
    ///
    /// # Errors
    /// Returns the first mapping error encountered.
    pub fn map_all(&self, paths: &[PathBuf]) -> Result<Vec<String>> {
        paths.iter().map(|p| self.map(p)).collect()
    }

    fn outside_root(&self, path: &Path) -> SitemapError {
        SitemapError::PathOutsideRoot {
            path: path.to_path_buf(),
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
#[path = "mapper_tests.rs"]
mod tests;
