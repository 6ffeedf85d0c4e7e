use crate::css::Stylesheet;
use crate::error::Result;
use crate::rules::{Check, CheckResult, CssTree};

pub(crate) const RESPONSIVE_FILE: &str = "responsive.css";

/// Counts media queries and width breakpoints in `base/responsive.css`.
pub struct ResponsiveDesign {
    min_media_queries: usize,
    min_breakpoints: usize,
}

impl ResponsiveDesign {
    #[must_use]
    pub const fn new(min_media_queries: usize, min_breakpoints: usize) -> Self {
        Self {
            min_media_queries,
            min_breakpoints,
        }
    }
}

impl Check for ResponsiveDesign {
    fn name(&self) -> &'static str {
        "Responsive Design"
    }

    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let Some(content) = tree.read_base_file(RESPONSIVE_FILE)? else {
            return Ok(CheckResult::failed(
                self.name(),
                format!(
                    "Responsive CSS file not found: {}",
                    tree.base_file(RESPONSIVE_FILE).display()
                ),
            ));
        };

        let media_queries = Stylesheet::count_occurrences(&content, "@media");
        let breakpoints = Stylesheet::count_occurrences(&content, "min-width")
            + Stylesheet::count_occurrences(&content, "max-width");

        let ok = media_queries >= self.min_media_queries && breakpoints >= self.min_breakpoints;
        Ok(CheckResult::pass_or_warn(
            ok,
            self.name(),
            format!(
                "Found {media_queries} media queries with {breakpoints} breakpoints (expected {}+ queries, {}+ breakpoints)",
                self.min_media_queries, self.min_breakpoints
            ),
        ))
    }
}
