use std::path::Path;

use super::*;

fn masks(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn empty_masks_use_html_default() {
    let filter = IncludeFilter::new(&[]).unwrap();

    assert_eq!(filter.masks(), &[DEFAULT_INCLUDE_MASK.to_string()]);
    assert!(filter.matches_name("index.html"));
    assert!(!filter.matches_name("style.css"));
}

#[test]
fn dot_is_matched_literally() {
    let filter = IncludeFilter::new(&masks(&["*.html"])).unwrap();

    assert!(filter.matches_name("page.html"));
    assert!(!filter.matches_name("pagexhtml"));
    assert!(!filter.matches_name("page.htm"));
}

#[test]
fn star_matches_empty_run() {
    let filter = IncludeFilter::new(&masks(&["index*.html"])).unwrap();

    assert!(filter.matches_name("index.html"));
    assert!(filter.matches_name("index2.html"));
    assert!(!filter.matches_name("about.html"));
}

#[test]
fn multiple_masks_are_or_combined() {
    let filter = IncludeFilter::new(&masks(&["*.html", "*.pdf"])).unwrap();

    assert!(filter.matches_name("a.html"));
    assert!(filter.matches_name("b.pdf"));
    assert!(!filter.matches_name("c.txt"));
}

#[test]
fn glob_metacharacters_other_than_star_are_literal() {
    let filter = IncludeFilter::new(&masks(&["page?.html", "[draft].html", "{a,b}.html"])).unwrap();

    assert!(filter.matches_name("page?.html"));
    assert!(!filter.matches_name("page1.html"));
    assert!(filter.matches_name("[draft].html"));
    assert!(!filter.matches_name("d.html"));
    assert!(filter.matches_name("{a,b}.html"));
    assert!(!filter.matches_name("a.html"));
}

#[test]
fn repeated_stars_behave_like_one() {
    let filter = IncludeFilter::new(&masks(&["**.html"])).unwrap();

    assert!(filter.matches_name("index.html"));
    assert!(!filter.matches_name("index.txt"));
}

#[test]
fn should_include_matches_file_name_only() {
    let filter = IncludeFilter::new(&masks(&["*.html"])).unwrap();

    assert!(filter.should_include(Path::new("/site/docs/guide.html")));
    assert!(!filter.should_include(Path::new("/site/docs.html/guide.txt")));
}

#[test]
fn blank_mask_is_rejected() {
    let err = IncludeFilter::new(&masks(&["*.html", "  "])).unwrap_err();
    assert!(matches!(err, SitemapError::Config(_)));
}

#[test]
fn mask_with_separator_is_rejected() {
    let err = IncludeFilter::new(&masks(&["docs/*.html"])).unwrap_err();
    assert!(err.to_string().contains("docs/*.html"));

    let err = IncludeFilter::new(&masks(&["docs\\*.html"])).unwrap_err();
    assert!(matches!(err, SitemapError::Config(_)));
}
