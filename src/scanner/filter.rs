use std::path::Path;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{Result, SitemapError};

/// Mask used when no include masks are configured.
pub const DEFAULT_INCLUDE_MASK: &str = "*.html";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

impl<F: FileFilter + ?Sized> FileFilter for &F {
    fn should_include(&self, path: &Path) -> bool {
        (**self).should_include(path)
    }
}

/// Include rules compiled from file name masks.
///
/// A name is included when it matches at least one mask. `*` matches any run
/// of characters; every other character, `.` included, matches only itself.
#[derive(Debug, Clone)]
pub struct IncludeFilter {
    masks: Vec<String>,
    matcher: GlobSet,
}

impl IncludeFilter {
    /// Compile the given masks. An empty list falls back to [`DEFAULT_INCLUDE_MASK`].
    ///
    /// # Errors
    /// Returns an error if any mask is blank, contains a path separator,
    /// or fails to compile.
    pub fn new(masks: &[String]) -> Result<Self> {
        let masks = if masks.is_empty() {
            vec![DEFAULT_INCLUDE_MASK.to_string()]
        } else {
            masks.to_vec()
        };

        let mut builder = GlobSetBuilder::new();
        for mask in &masks {
            validate_mask(mask)?;
            let glob = GlobBuilder::new(&mask_to_glob(mask))
                .literal_separator(true)
                .backslash_escape(true)
                .build()
                .map_err(|e| SitemapError::InvalidPattern {
                    pattern: mask.clone(),
                    source: e,
                })?;
            builder.add(glob);
        }
        let matcher = builder.build().map_err(|e| SitemapError::InvalidPattern {
            pattern: masks.join(", "),
            source: e,
        })?;

        Ok(Self { masks, matcher })
    }

    #[must_use]
    pub fn masks(&self) -> &[String] {
        &self.masks
    }

    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.matcher.is_match(name)
    }
}

impl FileFilter for IncludeFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| self.matcher.is_match(Path::new(name)))
    }
}

/// Check that a mask can only ever match a bare file name.
///
/// # Errors
/// Returns a configuration error naming the offending mask.
pub fn validate_mask(mask: &str) -> Result<()> {
    if mask.trim().is_empty() {
        return Err(SitemapError::Config(
            "include masks must not be empty".to_string(),
        ));
    }
    if mask.contains(['/', '\\']) {
        return Err(SitemapError::Config(format!(
            "include mask '{mask}' must not contain a path separator"
        )));
    }
    Ok(())
}

/// Translate a mask into glob syntax where `*` is the only metacharacter.
fn mask_to_glob(mask: &str) -> String {
    let mut glob = String::with_capacity(mask.len() * 2);
    let mut previous_star = false;
    for c in mask.chars() {
        match c {
            // A run of stars means the same as one; `**` has its own glob meaning.
            '*' if previous_star => continue,
            '*' => glob.push('*'),
            '?' | '[' | ']' | '{' | '}' | '!' | ',' => {
                glob.push('\\');
                glob.push(c);
            }
            _ => glob.push(c),
        }
        previous_star = c == '*';
    }
    glob
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
