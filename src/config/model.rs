use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::mapper::DEFAULT_INDEX_PAGE;
use crate::scanner::DEFAULT_INCLUDE_MASK;

/// Root of a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The `[sitemap]` table.
    #[serde(default)]
    pub sitemap: SiteConfig,
}

/// Settings for one sitemap run.
///
/// Library callers build this directly; the CLI fills it from a config file
/// and command-line overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Generated site directory to scan; the sitemap is written here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    /// Public URL prefix of the site. Trailing slashes are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// File name masks selecting pages (`*` is the only wildcard).
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,

    /// Number of directory levels to visit; 1 means the root only.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// File names that stand for their directory (`docs/index.html` → `docs/`).
    #[serde(default = "default_index_pages")]
    pub index_pages: Vec<String>,

    /// Do nothing at all.
    #[serde(default)]
    pub skip: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: None,
            url: None,
            includes: default_includes(),
            max_depth: default_max_depth(),
            index_pages: default_index_pages(),
            skip: false,
        }
    }
}

fn default_includes() -> Vec<String> {
    vec![DEFAULT_INCLUDE_MASK.to_string()]
}

const fn default_max_depth() -> usize {
    1
}

fn default_index_pages() -> Vec<String> {
    vec![DEFAULT_INDEX_PAGE.to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
