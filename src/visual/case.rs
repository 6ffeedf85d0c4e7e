use crate::config::{Viewport, VisualConfig};

/// Selector that stands for the whole page.
const PAGE_SELECTOR: &str = "body";

/// A named visual scenario: where to navigate, at what size, and what to capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// Unique key; also the artifact file stem.
    pub name: String,
    pub url: String,
    pub viewport: Viewport,
    /// Element to capture; `None` captures the full page.
    pub selector: Option<String>,
}

impl TestCase {
    #[must_use]
    pub fn new(name: &str, url: String, viewport: Viewport, selector: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            url,
            viewport,
            selector: selector.and_then(element_selector),
        }
    }
}

/// Build the test suite from configuration.
///
/// Explicit `[[visual.cases]]` come first, followed by every page expanded over
/// every viewport. With neither configured, the built-in suite is used.
#[must_use]
pub fn suite_from_config(config: &VisualConfig) -> Vec<TestCase> {
    suite_with_origins(config)
        .into_iter()
        .map(|(_, case)| case)
        .collect()
}

/// Like [`suite_from_config`], pairing each case with the config entry that
/// produced it, e.g. `visual.cases[0]`.
#[must_use]
pub fn suite_with_origins(config: &VisualConfig) -> Vec<(String, TestCase)> {
    if config.cases.is_empty() && config.pages.is_empty() {
        return default_suite(&config.base_url)
            .into_iter()
            .map(|case| ("built-in suite".to_string(), case))
            .collect();
    }

    let mut suite: Vec<(String, TestCase)> = config
        .cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let test_case = TestCase::new(
                &case.name,
                join_url(&config.base_url, &case.url),
                case.viewport,
                case.selector.as_deref(),
            );
            (format!("visual.cases[{i}]"), test_case)
        })
        .collect();

    for (i, page) in config.pages.iter().enumerate() {
        for viewport in &config.viewports {
            for selector in &page.selectors {
                let name = match element_selector(selector) {
                    None => format!("{}-{}", page.name, viewport.name),
                    Some(sel) => format!("{}-{}-{}", page.name, slug(&sel), viewport.name),
                };
                let origin = format!(
                    "visual.pages[{i}] ('{}' at viewport '{}', selector '{selector}')",
                    page.name, viewport.name
                );
                let test_case = TestCase::new(
                    &name,
                    join_url(&config.base_url, &page.path),
                    Viewport::new(viewport.width, viewport.height),
                    Some(selector),
                );
                suite.push((origin, test_case));
            }
        }
    }

    suite
}

/// The stock suite: the home page at three sizes, two inner pages, and five
/// components on the desktop home page.
#[must_use]
pub fn default_suite(base_url: &str) -> Vec<TestCase> {
    let desktop = Viewport::new(1920, 1080);
    let home = join_url(base_url, "");
    let page = |name: &str, path: &str, viewport| {
        TestCase::new(name, join_url(base_url, path), viewport, None)
    };
    let component = |name: &str, selector: &str| {
        TestCase::new(name, home.clone(), desktop, Some(selector))
    };

    vec![
        page("homepage-desktop", "", desktop),
        page("homepage-tablet", "", Viewport::new(768, 1024)),
        page("homepage-mobile", "", Viewport::new(375, 667)),
        page("about-page-desktop", "about.html", desktop),
        page("projects-page-desktop", "projects.html", desktop),
        component("navigation-component", ".navbar"),
        component("hero-component", ".hero"),
        component("footer-component", ".footer"),
        component("button-components", ".btn"),
        component("card-components", ".card"),
    ]
}

/// Resolve `path` against `base`; absolute URLs are returned unchanged.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    if path.contains("://") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// `None` for an empty or whole-page selector.
fn element_selector(selector: &str) -> Option<String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() || trimmed == PAGE_SELECTOR {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// File-name-safe form of a selector: `.site-nav > a` becomes `site-nav-a`.
#[must_use]
pub fn slug(selector: &str) -> String {
    let mut out = String::with_capacity(selector.len());
    for c in selector.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_end_matches('-').to_string()
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
