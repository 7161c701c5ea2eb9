use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SitemapError};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
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

/// Writes a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(SitemapError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# sitemap-gen configuration file

[sitemap]
# Generated site directory, relative to this file (default: current directory)
root = "public"

# Public URL prefix of the site; trailing slashes are ignored
url = "https://example.com"

# File name masks to list; '*' is the only wildcard
includes = ["*.html"]

# Directory levels to scan; 1 scans the root only
max_depth = 1

# File names that stand for their directory (docs/index.html -> docs/)
index_pages = ["index.html"]

# Turn generation off without removing the configuration
# skip = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
