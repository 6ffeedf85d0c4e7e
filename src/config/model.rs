use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Component files the house layout expects under `components/`.
pub const DEFAULT_EXPECTED_COMPONENTS: &[&str] = &[
    "buttons.css",
    "navigation.css",
    "hero.css",
    "services.css",
    "footer.css",
    "avatar.css",
    "preloader.css",
    "icons.css",
    "featured.css",
    "sponsors.css",
    "projects.css",
    "forms.css",
    "organizers.css",
    "page-header.css",
    "footer-utilities.css",
];

/// Class prefixes accepted by the BEM check without being BEM-shaped.
///
/// Layout and utility prefixes come first, then site-specific domain prefixes.
/// New domain prefixes are a policy decision: add them here (or in
/// `rules.bem.allowed_prefixes`) explicitly rather than widening the BEM shapes.
pub const DEFAULT_ALLOWED_PREFIXES: &[&str] = &[
    // layout / grid
    "container", "row", "col", "btn", "nav",
    // spacing / display utilities
    "d-", "p-", "m-", "text-", "bg-", "border-", "rounded-", "shadow-", "opacity-",
    "position-", "top-", "left-", "right-", "bottom-", "w-", "h-", "max-", "min-",
    "overflow-", "flex-", "grid-", "justify-", "align-", "items-", "content-", "self-",
    "order-", "grow-", "shrink-", "basis-", "gap-", "space-", "divide-",
    // accessibility and state
    "sr-only", "skip-link", "is-", "has-",
    // site sections and domain prefixes
    "site-", "page-", "projects-", "meeting-", "organizer-", "shoutout-", "custom-",
    "form-", "floating-", "img-", "fluid-", "responsive-", "mobile-", "tablet-",
    "desktop-", "avatar-", "preloader-", "spinner-", "icon-", "featured-", "sponsors-",
    "contact-", "profile-", "about-", "footer-col",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config schema version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Static rule engine settings.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Visual regression settings.
    #[serde(default)]
    pub visual: VisualConfig,
}

// ============================================================================
// Rule engine
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RulesConfig {
    /// Root of the stylesheet tree (`components/`, `base/` live below it).
    #[serde(default = "default_css_root")]
    pub css_root: PathBuf,

    /// File names expected in `components/`.
    #[serde(default = "default_expected_components")]
    pub expected_components: Vec<String>,

    #[serde(default)]
    pub custom_properties: CustomPropertiesConfig,

    #[serde(default)]
    pub bem: BemConfig,

    #[serde(default)]
    pub important: ImportantConfig,

    #[serde(default)]
    pub responsive: ResponsiveConfig,

    #[serde(default)]
    pub accessibility: AccessibilityConfig,

    #[serde(default)]
    pub performance: PerformanceConfig,

    #[serde(default)]
    pub quality: QualityConfig,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            css_root: default_css_root(),
            expected_components: default_expected_components(),
            custom_properties: CustomPropertiesConfig::default(),
            bem: BemConfig::default(),
            important: ImportantConfig::default(),
            responsive: ResponsiveConfig::default(),
            accessibility: AccessibilityConfig::default(),
            performance: PerformanceConfig::default(),
            quality: QualityConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomPropertiesConfig {
    /// Minimum number of `--name:` declarations in `base/variables.css`.
    #[serde(default = "default_min_custom_properties")]
    pub min_count: usize,
}

impl Default for CustomPropertiesConfig {
    fn default() -> Self {
        Self {
            min_count: default_min_custom_properties(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BemConfig {
    /// Violation rate (percent) below which the check passes.
    #[serde(default = "default_bem_pass_below")]
    pub pass_below: f64,

    /// Violation rate (percent) below which the check warns instead of failing.
    #[serde(default = "default_bem_warn_below")]
    pub warn_below: f64,

    /// Class-name prefixes accepted without BEM shape.
    #[serde(default = "default_allowed_prefixes")]
    pub allowed_prefixes: Vec<String>,

    /// Regular expressions accepted without BEM shape.
    #[serde(default)]
    pub allowed_patterns: Vec<String>,
}

impl Default for BemConfig {
    fn default() -> Self {
        Self {
            pass_below: default_bem_pass_below(),
            warn_below: default_bem_warn_below(),
            allowed_prefixes: default_allowed_prefixes(),
            allowed_patterns: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportantConfig {
    /// Component files (glob patterns) allowed to use `!important`.
    #[serde(default)]
    pub allowed_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponsiveConfig {
    #[serde(default = "default_min_media_queries")]
    pub min_media_queries: usize,

    #[serde(default = "default_min_breakpoints")]
    pub min_breakpoints: usize,
}

impl Default for ResponsiveConfig {
    fn default() -> Self {
        Self {
            min_media_queries: default_min_media_queries(),
            min_breakpoints: default_min_breakpoints(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessibilityConfig {
    /// Minimum of focus + ARIA + contrast signals summed over component files.
    #[serde(default = "default_min_a11y_signals")]
    pub min_signals: usize,
}

impl Default for AccessibilityConfig {
    fn default() -> Self {
        Self {
            min_signals: default_min_a11y_signals(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceConfig {
    #[serde(default = "default_max_avg_bytes")]
    pub max_avg_bytes: f64,

    #[serde(default = "default_max_avg_lines")]
    pub max_avg_lines: f64,

    /// Complex selectors per hundred lines.
    #[serde(default = "default_max_complex_rate")]
    pub max_complex_rate: f64,

    /// A selector with more compound parts than this is complex.
    #[serde(default = "default_max_selector_parts")]
    pub max_selector_parts: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            max_avg_bytes: default_max_avg_bytes(),
            max_avg_lines: default_max_avg_lines(),
            max_complex_rate: default_max_complex_rate(),
            max_selector_parts: default_max_selector_parts(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QualityConfig {
    #[serde(default = "default_min_comments_per_file")]
    pub min_comments_per_file: f64,

    /// Empty rules as a percentage of distinct selectors.
    #[serde(default = "default_max_empty_rate")]
    pub max_empty_rate: f64,

    /// Repeated selectors as a percentage of distinct selectors.
    #[serde(default = "default_max_duplicate_rate")]
    pub max_duplicate_rate: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            min_comments_per_file: default_min_comments_per_file(),
            max_empty_rate: default_max_empty_rate(),
            max_duplicate_rate: default_max_duplicate_rate(),
        }
    }
}

// ============================================================================
// Visual pipeline
// ============================================================================

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffEngine {
    /// Built-in pixel comparison.
    #[default]
    Pixel,
    /// ImageMagick `compare -metric AE`.
    #[serde(rename = "imagemagick")]
    ImageMagick,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Explicit test case `[[visual.cases]]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CaseConfig {
    pub name: String,
    /// Absolute URL, or a path joined onto `visual.base_url`.
    pub url: String,
    pub viewport: Viewport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

/// Named viewport `[[visual.viewports]]` used to expand pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewportConfig {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// Page `[[visual.pages]]`, expanded over every configured viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    pub name: String,
    pub path: String,
    #[serde(default = "default_page_selectors")]
    pub selectors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VisualConfig {
    /// Holds `baseline/`, `current/` and `diff/`.
    #[serde(default = "default_screens_root")]
    pub screens_root: PathBuf,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Test cases evaluated concurrently.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Bound on navigation and selector waits, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default)]
    pub diff_engine: DiffEngine,

    /// Differing pixels tolerated by the pixel engine before a case fails.
    #[serde(default)]
    pub pixel_tolerance: u64,

    /// Node.js executable used to run the capture driver.
    #[serde(default = "default_node")]
    pub node: String,

    #[serde(default)]
    pub cases: Vec<CaseConfig>,

    #[serde(default)]
    pub viewports: Vec<ViewportConfig>,

    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            screens_root: default_screens_root(),
            base_url: default_base_url(),
            workers: default_workers(),
            timeout_ms: default_timeout_ms(),
            diff_engine: DiffEngine::default(),
            pixel_tolerance: 0,
            node: default_node(),
            cases: Vec::new(),
            viewports: Vec::new(),
            pages: Vec::new(),
        }
    }
}

fn default_css_root() -> PathBuf {
    PathBuf::from("css")
}

fn default_expected_components() -> Vec<String> {
    DEFAULT_EXPECTED_COMPONENTS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_allowed_prefixes() -> Vec<String> {
    DEFAULT_ALLOWED_PREFIXES
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

const fn default_min_custom_properties() -> usize {
    100
}

const fn default_bem_pass_below() -> f64 {
    5.0
}

const fn default_bem_warn_below() -> f64 {
    15.0
}

const fn default_min_media_queries() -> usize {
    5
}

const fn default_min_breakpoints() -> usize {
    10
}

const fn default_min_a11y_signals() -> usize {
    10
}

const fn default_max_avg_bytes() -> f64 {
    5000.0
}

const fn default_max_avg_lines() -> f64 {
    200.0
}

const fn default_max_complex_rate() -> f64 {
    10.0
}

const fn default_max_selector_parts() -> usize {
    3
}

const fn default_min_comments_per_file() -> f64 {
    2.0
}

const fn default_max_empty_rate() -> f64 {
    5.0
}

const fn default_max_duplicate_rate() -> f64 {
    2.0
}

fn default_screens_root() -> PathBuf {
    PathBuf::from("tests/screenshots")
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

const fn default_workers() -> usize {
    1
}

const fn default_timeout_ms() -> u64 {
    5000
}

fn default_node() -> String {
    "node".to_string()
}

fn default_page_selectors() -> Vec<String> {
    vec!["body".to_string()]
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
