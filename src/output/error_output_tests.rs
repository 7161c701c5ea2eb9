use std::path::PathBuf;

use super::*;

fn make_output(use_colors: bool) -> ErrorOutput {
    ErrorOutput::with_colors(use_colors)
}

#[test]
fn error_without_colors_basic() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Config", "max_depth must be at least 1", None, None);
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(result, "✖ Config: max_depth must be at least 1\n");
}

#[test]
fn error_without_colors_full() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_error(
        &mut buf,
        "DirectoryRead",
        "cannot list directory site/private",
        Some("Permission denied (os error 13)"),
        Some("Check the directory permissions"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "✖ DirectoryRead: cannot list directory site/private\n  \
         × Permission denied (os error 13)\n  \
         help: Check the directory permissions\n"
    );
}

#[test]
fn warning_without_colors_with_suggestion() {
    let out = make_output(false);
    let mut buf = Vec::new();
    out.write_warning(
        &mut buf,
        "no pages matched the include masks",
        Some("Raise --max-depth or adjust --include"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "⚠ Warning: no pages matched the include masks\n  help: Raise --max-depth or adjust --include\n"
    );
}

#[test]
fn error_with_colors_contains_ansi() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "SiteRoot", "missing", Some("detail"), Some("fix"));
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b["));
    assert!(result.contains("✖ SiteRoot:"));
    assert!(result.contains("× detail"));
    assert!(result.contains("help:"));
}

#[test]
fn warning_with_colors_contains_ansi() {
    let out = make_output(true);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "test warning", None);
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b["));
    assert!(result.contains("⚠ Warning:"));
}

#[test]
fn new_with_never_mode_has_no_ansi() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Test", "msg", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Test: msg\n");
}

#[test]
fn new_with_always_mode_has_ansi() {
    let out = ErrorOutput::new(ColorMode::Always);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "Test", "msg", None, None);
    assert!(String::from_utf8(buf).unwrap().contains("\x1b["));
}

#[test]
fn report_uses_error_parts() {
    let err = SitemapError::RootNotFound(PathBuf::from("/no-exist-test-site"));
    let out = make_output(false);
    let mut buf = Vec::new();
    let detail = err.detail();
    out.write_error(
        &mut buf,
        err.error_type(),
        &err.message(),
        detail.as_deref(),
        err.suggestion(),
    );
    let result = String::from_utf8(buf).unwrap();
    assert!(result.starts_with("✖ SiteRoot: site directory /no-exist-test-site does not exist\n"));
    assert!(result.contains("help:"));
}
