use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SitemapError};

use super::Config;

/// Result of loading a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// File the configuration came from; `None` when defaults were used.
    pub path: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file does not exist, cannot be read, or cannot be parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

/// Name of the configuration file discovered in the current directory.
pub const LOCAL_CONFIG_NAME: &str = ".sitemap-gen.toml";

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.sitemap-gen.toml` in current directory
/// 2. Returns `Config::default()` if no config found
///
/// A relative `root` is resolved against the directory holding the file.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<LoadResult> {
        let content = self.fs.read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        if let Some(root) = config.sitemap.root.take() {
            let base = path.parent().unwrap_or_else(|| Path::new(""));
            config.sitemap.root = Some(if root.is_absolute() {
                root
            } else {
                base.join(root)
            });
        }

        debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            path: Some(path.to_path_buf()),
        })
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        if let Some(path) = self.local_config_path()
            && self.fs.exists(&path)
        {
            return self.read_config(&path);
        }

        Ok(LoadResult {
            config: Config::default(),
            path: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        if !self.fs.exists(path) {
            return Err(SitemapError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
