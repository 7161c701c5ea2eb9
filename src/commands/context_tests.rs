use std::path::{Path, PathBuf};

use clap::Parser;

use super::*;
use crate::config::LoadResult;
use crate::error::Result;

struct FixedLoader;

impl ConfigLoader for FixedLoader {
    fn load(&self) -> Result<LoadResult> {
        Ok(LoadResult {
            config: Config::default(),
            path: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        Ok(LoadResult {
            config: Config::default(),
            path: Some(path.to_path_buf()),
        })
    }
}

#[test]
fn color_choice_maps_one_to_one() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn explicit_path_uses_load_from_path() {
    let result = load_config_with(&FixedLoader, Some(Path::new("site.toml"))).unwrap();
    assert_eq!(result.path, Some(PathBuf::from("site.toml")));
}

#[test]
fn no_path_uses_discovery() {
    let result = load_config_with(&FixedLoader, None).unwrap();
    assert_eq!(result.path, None);
}

#[test]
fn no_config_flag_ignores_explicit_path() {
    let cli = Cli::parse_from(["sitemap-gen", "--no-config", "generate"]);

    let result = load_config(Some(Path::new("does-not-exist.toml")), &cli).unwrap();

    assert_eq!(result.config, Config::default());
    assert_eq!(result.path, None);
}
