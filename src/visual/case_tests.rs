use super::*;
use crate::config::{CaseConfig, PageConfig, ViewportConfig};

#[test]
fn default_suite_has_ten_unique_cases() {
    let suite = default_suite("http://localhost:4000");
    assert_eq!(suite.len(), 10);
    let mut names: Vec<_> = suite.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 10);
}

#[test]
fn default_suite_pages_are_full_page() {
    let suite = default_suite("http://localhost:4000/");
    let about = suite.iter().find(|c| c.name == "about-page-desktop").unwrap();
    assert_eq!(about.url, "http://localhost:4000/about.html");
    assert_eq!(about.selector, None);

    let nav = suite.iter().find(|c| c.name == "navigation-component").unwrap();
    assert_eq!(nav.url, "http://localhost:4000");
    assert_eq!(nav.selector.as_deref(), Some(".navbar"));
    assert_eq!(nav.viewport, Viewport::new(1920, 1080));
}

#[test]
fn empty_config_uses_default_suite() {
    let suite = suite_from_config(&VisualConfig::default());
    assert_eq!(suite, default_suite("http://localhost:4000"));
}

#[test]
fn explicit_cases_resolve_relative_urls() {
    let config = VisualConfig {
        base_url: "http://example.test".to_string(),
        cases: vec![
            CaseConfig {
                name: "contact".to_string(),
                url: "/contact.html".to_string(),
                viewport: Viewport::new(800, 600),
                selector: Some(".form".to_string()),
            },
            CaseConfig {
                name: "external".to_string(),
                url: "https://other.test/page".to_string(),
                viewport: Viewport::new(800, 600),
                selector: None,
            },
        ],
        ..VisualConfig::default()
    };
    let suite = suite_from_config(&config);
    assert_eq!(suite.len(), 2);
    assert_eq!(suite[0].url, "http://example.test/contact.html");
    assert_eq!(suite[1].url, "https://other.test/page");
}

#[test]
fn pages_expand_over_viewports() {
    let config = VisualConfig {
        viewports: vec![
            ViewportConfig {
                name: "desktop".to_string(),
                width: 1920,
                height: 1080,
            },
            ViewportConfig {
                name: "mobile".to_string(),
                width: 375,
                height: 667,
            },
        ],
        pages: vec![PageConfig {
            name: "home".to_string(),
            path: "/".to_string(),
            selectors: vec!["body".to_string(), ".site-nav > a".to_string()],
        }],
        ..VisualConfig::default()
    };
    let names: Vec<_> = suite_from_config(&config)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "home-desktop",
            "home-site-nav-a-desktop",
            "home-mobile",
            "home-site-nav-a-mobile",
        ]
    );
}

#[test]
fn join_url_handles_slashes() {
    assert_eq!(join_url("http://a.test/", "/x.html"), "http://a.test/x.html");
    assert_eq!(join_url("http://a.test", "x.html"), "http://a.test/x.html");
    assert_eq!(join_url("http://a.test/", ""), "http://a.test");
}

#[test]
fn slug_is_file_name_safe() {
    assert_eq!(slug(".Hero__Title"), "hero-title");
    assert_eq!(slug("#main .card:hover"), "main-card-hover");
}
