pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod output;
pub mod scanner;

pub use config::SiteConfig;
pub use error::{Result, SitemapError};
pub use generator::{GenerateOutcome, generate};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERATION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
