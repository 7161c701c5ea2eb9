use std::path::PathBuf;

use crate::cli::{Cli, GenerateArgs};
use crate::config::SiteConfig;
use crate::generator::{GenerateOutcome, generate};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_GENERATION_FAILED, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    let output = ErrorOutput::new(color_choice_to_mode(cli.color));

    match run_generate_impl(args, cli) {
        Ok(GenerateOutcome::Skipped) => {
            if !cli.quiet {
                println!("Sitemap generation skipped");
            }
            EXIT_SUCCESS
        }
        Ok(GenerateOutcome::Written { path, urls }) => {
            if urls.is_empty() {
                output.print_warning(
                    "No pages matched; the sitemap is empty",
                    Some("Check --include masks and --max-depth"),
                );
            }
            if !cli.quiet {
                println!("Generated {} with {} URL(s)", path.display(), urls.len());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            output.report(&e);
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_GENERATION_FAILED
            }
        }
    }
}

/// Loads settings, applies command-line overrides and runs the generator.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or generation fails.
pub fn run_generate_impl(args: &GenerateArgs, cli: &Cli) -> Result<GenerateOutcome> {
    let mut site = load_config(args.config.as_deref(), cli)?.config.sitemap;
    apply_cli_overrides(&mut site, args);
    generate(&site)
}

/// Command-line values win over the configuration file.
///
/// List options replace the configured list when given at least once. With no
/// root from either source the current directory is scanned.
pub fn apply_cli_overrides(site: &mut SiteConfig, args: &GenerateArgs) {
    if let Some(root) = &args.root {
        site.root = Some(root.clone());
    }
    if site.root.is_none() {
        site.root = Some(PathBuf::from("."));
    }
    if let Some(url) = &args.url {
        site.url = Some(url.clone());
    }
    if !args.includes.is_empty() {
        site.includes.clone_from(&args.includes);
    }
    if let Some(max_depth) = args.max_depth {
        site.max_depth = max_depth;
    }
    if !args.index_pages.is_empty() {
        site.index_pages.clone_from(&args.index_pages);
    }
    site.skip |= args.skip;
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
