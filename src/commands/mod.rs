pub mod config;
pub mod context;
pub mod generate;
pub mod init;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use generate::{apply_cli_overrides, run_generate, run_generate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
