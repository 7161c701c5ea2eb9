use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigOutputFormat};
use crate::config::{Config, validate_config_semantics};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SitemapError};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                e.suggestion(),
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SitemapError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config.sitemap)
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            crate::output::print_error_full(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                None,
            );
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli)?.config;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    use std::fmt::Write;

    let site = &config.sitemap;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    output.push_str("[sitemap]\n");
    match &site.root {
        Some(root) => {
            let _ = writeln!(output, "  root = \"{}\"", root.display());
        }
        None => output.push_str("  root = (current directory)\n"),
    }
    match &site.url {
        Some(url) => {
            let _ = writeln!(output, "  url = \"{url}\"");
        }
        None => output.push_str("  url = (not set)\n"),
    }
    let _ = writeln!(output, "  includes = {:?}", site.includes);
    let _ = writeln!(output, "  max_depth = {}", site.max_depth);
    let _ = writeln!(output, "  index_pages = {:?}", site.index_pages);
    let _ = writeln!(output, "  skip = {}", site.skip);

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
