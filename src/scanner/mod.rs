mod filter;

pub use filter::{DEFAULT_INCLUDE_MASK, FileFilter, IncludeFilter, validate_mask};

use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::{Result, SitemapError};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// How a directory child takes part in the walk.
enum EntryKind {
    Directory,
    File,
    Other,
}

/// Depth-limited, sorted pre-order walk over a site tree.
///
/// Depth 1 is the root itself. Inside each directory the matching files are
/// returned first in name order, then subdirectories are entered in name
/// order. Directories are never filtered by mask, only by depth.
pub struct SiteScanner<F: FileFilter> {
    filter: F,
    max_depth: usize,
}

impl<F: FileFilter> SiteScanner<F> {
    #[must_use]
    pub const fn new(filter: F, max_depth: usize) -> Self {
        Self { filter, max_depth }
    }

    fn scan_dir(&self, dir: &Path, depth: usize, files: &mut Vec<PathBuf>) -> Result<()> {
        let mut subdirs = Vec::new();

        for (path, kind) in list_sorted(dir)? {
            match kind {
                EntryKind::Directory => subdirs.push(path),
                EntryKind::File if self.filter.should_include(&path) => {
                    debug!(path = %path.display(), "add file to sitemap");
                    files.push(path);
                }
                EntryKind::File | EntryKind::Other => {
                    trace!(path = %path.display(), "skip entry");
                }
            }
        }

        if depth < self.max_depth {
            for subdir in subdirs {
                self.scan_dir(&subdir, depth + 1, files)?;
            }
        } else if !subdirs.is_empty() {
            trace!(dir = %dir.display(), skipped = subdirs.len(), "depth limit reached");
        }

        Ok(())
    }
}

impl<F: FileFilter> FileScanner for SiteScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        if self.max_depth > 0 {
            self.scan_dir(root, 1, &mut files)?;
        }
        Ok(files)
    }
}

/// List the immediate children of `dir`, sorted by file name.
fn list_sorted(dir: &Path) -> Result<Vec<(PathBuf, EntryKind)>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(|e| SitemapError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e,
            })?;
            let kind = classify(&entry);
            Ok((entry.into_path(), kind))
        })
        .collect()
}

fn classify(entry: &walkdir::DirEntry) -> EntryKind {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return EntryKind::Directory;
    }
    if file_type.is_file() {
        return EntryKind::File;
    }
    if entry.path_is_symlink() {
        // Links count as whatever they point at; dangling ones are ignored.
        return match std::fs::metadata(entry.path()) {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(_) => EntryKind::Other,
            Err(e) => {
                debug!(path = %entry.path().display(), error = %e, "skip dangling symlink");
                EntryKind::Other
            }
        };
    }
    EntryKind::Other
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
