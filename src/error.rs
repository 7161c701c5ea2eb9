use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid include mask: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Site directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Site root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Failed to read directory: {}", .path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Path {} is outside the site root {}", .path.display(), .root.display())]
    PathOutsideRoot { path: PathBuf, root: PathBuf },

    #[error("File name is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("XML serialization error: {0}")]
    Xml(String),

    #[error("Failed to write sitemap: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SitemapError {
    /// Short category label used as the headline of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::RootNotFound(_) | Self::RootNotDirectory(_) => "SiteRoot",
            Self::DirectoryRead { .. } => "DirectoryRead",
            Self::PathOutsideRoot { .. } | Self::NonUtf8Path(_) => "PathMapping",
            Self::Xml(_) => "Xml",
            Self::Write { .. } => "Write",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Human-readable message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Xml(msg) => msg.clone(),
            Self::InvalidPattern { pattern, .. } => format!("invalid include mask '{pattern}'"),
            Self::RootNotFound(path) => {
                format!("site directory {} does not exist", path.display())
            }
            Self::RootNotDirectory(path) => {
                format!("site root {} is not a directory", path.display())
            }
            Self::DirectoryRead { path, .. } => {
                format!("cannot list directory {}", path.display())
            }
            Self::PathOutsideRoot { path, root } => format!(
                "{} is not located under {}",
                path.display(),
                root.display()
            ),
            Self::NonUtf8Path(path) => {
                format!("{} cannot be expressed as a URL", path.display())
            }
            Self::Write { path, .. } => format!("cannot write {}", path.display()),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::DirectoryRead { source, .. } => Some(source.to_string()),
            Self::Write { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RootNotFound(_) => {
                Some("Build the site first, or pass the generated site directory as ROOT")
            }
            Self::InvalidPattern { .. } => {
                Some("Include masks match file names only; use '*' as the only wildcard")
            }
            Self::DirectoryRead { .. } => Some("Check the directory permissions"),
            Self::NonUtf8Path(_) => Some("Rename the file or exclude it with --include masks"),
            _ => None,
        }
    }

    /// Errors detected before any traversal starts, caused by bad settings.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::InvalidPattern { .. } | Self::TomlParse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SitemapError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
