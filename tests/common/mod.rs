#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sitemap-gen binary.
#[macro_export]
macro_rules! sitemap_gen {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sitemap-gen"))
    };
}

/// A small site tree shared by the integration tests.
pub const SITE_FILES: &[&str] = &[
    "index.html",
    "index2.html",
    "style.css",
    "sub1/index.html",
    "sub1/page.html",
    "sub2/index2.html",
];

pub const BASIC_CONFIG: &str = r#"
[sitemap]
url = "http://example.com"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a fixture holding [`SITE_FILES`] under `site/`.
    pub fn with_site() -> Self {
        let fixture = Self::new();
        for file in SITE_FILES {
            fixture.create_file(&format!("site/{file}"), "<html></html>");
        }
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.sitemap-gen.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sitemap-gen.toml", content);
    }

    /// Reads a file relative to the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the `<loc>` values of a written sitemap, in document order.
    pub fn locs(&self, relative_path: &str) -> Vec<String> {
        self.read(relative_path)
            .lines()
            .filter_map(|line| {
                let line = line.trim();
                line.strip_prefix("<loc>")?
                    .strip_suffix("</loc>")
                    .map(str::to_string)
            })
            .collect()
    }
}
