use crate::config::PerformanceConfig;
use crate::css::{Stylesheet, selector_parts, split_selector_list};
use crate::error::Result;
use crate::rules::{Check, CheckResult, CssTree};

use super::ratio;

/// Advisory size and selector-complexity budget. Never fails.
pub struct Performance {
    limits: PerformanceConfig,
}

impl Performance {
    #[must_use]
    pub const fn new(limits: PerformanceConfig) -> Self {
        Self { limits }
    }
}

impl Check for Performance {
    fn name(&self) -> &'static str {
        "Performance Metrics"
    }

    #[allow(clippy::cast_precision_loss)]
    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let components = tree.read_components()?;
        let mut total_size = 0u64;
        let mut total_lines = 0usize;
        let mut complex = 0usize;

        for component in &components {
            total_size += component.size;
            total_lines += Stylesheet::line_count(&component.source);
            let sheet = Stylesheet::parse(&component.source);
            complex += sheet
                .rules
                .iter()
                .flat_map(|rule| split_selector_list(&rule.selector))
                .filter(|selector| selector_parts(selector).len() > self.limits.max_selector_parts)
                .count();
        }

        let avg_size = ratio(total_size as f64, components.len());
        let avg_lines = ratio(total_lines as f64, components.len());
        let complexity = ratio(complex as f64, total_lines) * 100.0;

        let ok = avg_size < self.limits.max_avg_bytes
            && avg_lines < self.limits.max_avg_lines
            && complexity < self.limits.max_complex_rate;

        Ok(CheckResult::pass_or_warn(
            ok,
            self.name(),
            format!(
                "Performance: {avg_size:.0}B avg file size, {avg_lines:.0} avg lines, {complexity:.1}% complexity (limits < {}B, < {} lines, < {}%)",
                self.limits.max_avg_bytes, self.limits.max_avg_lines, self.limits.max_complex_rate
            ),
        ))
    }
}
