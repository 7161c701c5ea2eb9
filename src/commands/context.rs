//! Shared plumbing for subcommands: color selection and config loading.

use std::path::Path;

use tracing::debug;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::output::ColorMode;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration for a command.
///
/// An explicit `config_path` must exist. Without one, `.sitemap-gen.toml` in
/// the current directory is used when present. `--no-config` skips both.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, cli: &Cli) -> crate::Result<LoadResult> {
    if cli.no_config {
        debug!("configuration loading disabled");
        return Ok(LoadResult {
            config: Config::default(),
            path: None,
        });
    }

    load_config_with(&FileConfigLoader::new(), config_path)
}

pub(crate) fn load_config_with<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
) -> crate::Result<LoadResult> {
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
