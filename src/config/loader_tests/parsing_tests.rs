//! Tests for TOML parsing failures surfaced by the loader.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};
use crate::error::SitemapError;

use super::mock_fs::MockFileSystem;

#[test]
fn invalid_toml_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.sitemap-gen.toml", "[sitemap\n");

    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();

    assert!(matches!(err, SitemapError::TomlParse(_)));
    assert!(err.is_config_error());
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/site.toml", "[sitemap]\nmax_depth = \"two\"\n");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/site.toml"))
        .unwrap_err();

    assert!(matches!(err, SitemapError::TomlParse(_)));
}

#[test]
fn unknown_field_is_rejected() {
    let fs = MockFileSystem::new().with_file("/site.toml", "[sitemap]\nsiteurl = \"x\"\n");

    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/site.toml"))
        .unwrap_err();

    assert!(err.to_string().contains("siteurl"));
}
