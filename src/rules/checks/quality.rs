use indexmap::IndexMap;

use crate::config::QualityConfig;
use crate::css::Stylesheet;
use crate::error::Result;
use crate::rules::{Check, CheckResult, CssTree};

use super::ratio;

const MAX_LISTED_DUPLICATES: usize = 3;

/// Comment density, empty rules and repeated selectors across component files.
pub struct CodeQuality {
    limits: QualityConfig,
}

impl CodeQuality {
    #[must_use]
    pub const fn new(limits: QualityConfig) -> Self {
        Self { limits }
    }
}

impl Check for CodeQuality {
    fn name(&self) -> &'static str {
        "Code Quality"
    }

    #[allow(clippy::cast_precision_loss)]
    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let components = tree.read_components()?;
        let mut comments = 0usize;
        let mut empty = 0usize;
        // Selector text -> occurrences, in first-seen order.
        let mut selectors: IndexMap<String, usize> = IndexMap::new();

        for component in &components {
            let sheet = Stylesheet::parse(&component.source);
            comments += sheet.comments;
            for rule in sheet.rules {
                if rule.is_empty() {
                    empty += 1;
                }
                *selectors.entry(rule.selector).or_insert(0) += 1;
            }
        }

        let distinct = selectors.len();
        let duplicates: usize = selectors.values().map(|n| n - 1).sum();
        let comment_rate = ratio(comments as f64, components.len());
        let empty_rate = ratio(empty as f64, distinct) * 100.0;
        let duplicate_rate = ratio(duplicates as f64, distinct) * 100.0;

        let ok = comment_rate >= self.limits.min_comments_per_file
            && empty_rate < self.limits.max_empty_rate
            && duplicate_rate < self.limits.max_duplicate_rate;

        let mut message = format!(
            "Quality: {comment_rate:.1} comments/file, {empty_rate:.1}% empty rules, {duplicate_rate:.1}% duplicates (minimum {} comments/file, limits < {}% empty, < {}% duplicates)",
            self.limits.min_comments_per_file,
            self.limits.max_empty_rate,
            self.limits.max_duplicate_rate
        );
        let repeated: Vec<&str> = selectors
            .iter()
            .filter(|(_, n)| **n > 1)
            .take(MAX_LISTED_DUPLICATES)
            .map(|(selector, _)| selector.as_str())
            .collect();
        if !repeated.is_empty() {
            message.push_str(&format!("; duplicated: {}", repeated.join(" | ")));
        }

        Ok(CheckResult::pass_or_warn(ok, self.name(), message))
    }
}
