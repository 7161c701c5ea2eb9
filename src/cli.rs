use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use crate::config::LOCAL_CONFIG_NAME;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sitemap-gen")]
#[command(author, version, about = "Generate sitemap.xml for a static site tree")]
#[command(long_about = "Scans a generated static site directory and writes a sitemap.xml \
    listing every page for search engines.\n\n\
    Exit codes:\n  \
    0 - Sitemap written (or generation skipped)\n  \
    1 - Generation failed (missing site directory, unreadable directory, write error)\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Maximum level for diagnostic logging on stderr.
    #[must_use]
    pub const fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the site directory and write sitemap.xml into it
    Generate(GenerateArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Generated site directory (overrides config `root`, default: current directory)
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Public URL prefix of the site, e.g. https://example.com
    #[arg(short = 'u', long = "url")]
    pub url: Option<String>,

    /// File name mask to include ('*' wildcard, can be specified multiple times)
    #[arg(short, long = "include")]
    pub includes: Vec<String>,

    /// Directory levels to scan; 1 scans the root only
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// File name that stands for its directory (can be specified multiple times)
    #[arg(long = "index-page")]
    pub index_pages: Vec<String>,

    /// Skip sitemap generation entirely
    #[arg(long)]
    pub skip: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
