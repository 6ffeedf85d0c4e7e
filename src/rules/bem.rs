//! BEM class-name classification.
//!
//! A class token is compliant when it has one of the canonical BEM shapes
//! (`block`, `block__element`, `block--modifier`, `block__element--modifier`,
//! each part lower-kebab-case with single hyphens) or when the configured exception list accepts it.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::BemConfig;
use crate::error::{CssGuardError, Result};

static BEM_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[a-z][a-z0-9]*(-[a-z0-9]+)*",
        r"(__[a-z][a-z0-9]*(-[a-z0-9]+)*)?",
        r"(--[a-z][a-z0-9]*(-[a-z0-9]+)*)?$",
    ))
    .expect("Invalid regex")
});

/// Classifies class tokens against BEM shapes and an explicit exception list.
#[derive(Debug, Clone)]
pub struct BemClassifier {
    allowed_prefixes: Vec<String>,
    allowed_patterns: Vec<Regex>,
}

/// Counts produced by classifying a batch of class tokens.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BemStats {
    pub total: usize,
    pub violations: usize,
    /// Distinct offending tokens in first-seen order.
    pub offenders: Vec<String>,
}

impl BemStats {
    /// Violations as a percentage of all tokens; `0.0` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn violation_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.violations as f64 / self.total as f64 * 100.0
    }
}

impl BemClassifier {
    /// Build a classifier from the configured exception lists.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if an allowed pattern is not a valid regex.
    pub fn new(config: &BemConfig) -> Result<Self> {
        let allowed_patterns = config
            .allowed_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| CssGuardError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            allowed_prefixes: config.allowed_prefixes.clone(),
            allowed_patterns,
        })
    }

    /// Whether `token` has a canonical BEM shape, ignoring exceptions.
    #[must_use]
    pub fn is_bem_shaped(token: &str) -> bool {
        BEM_SHAPE.is_match(token)
    }

    /// Whether `token` is accepted by the exception list.
    #[must_use]
    pub fn is_allowed(&self, token: &str) -> bool {
        self.allowed_prefixes
            .iter()
            .any(|prefix| token.starts_with(prefix.as_str()))
            || self.allowed_patterns.iter().any(|re| re.is_match(token))
    }

    #[must_use]
    pub fn is_compliant(&self, token: &str) -> bool {
        Self::is_bem_shaped(token) || self.is_allowed(token)
    }

    /// Classify every token; duplicates count once per occurrence.
    #[must_use]
    pub fn classify<'t>(&self, tokens: impl IntoIterator<Item = &'t str>) -> BemStats {
        let mut stats = BemStats::default();
        for token in tokens {
            stats.total += 1;
            if !self.is_compliant(token) {
                stats.violations += 1;
                if !stats.offenders.iter().any(|o| o == token) {
                    stats.offenders.push(token.to_string());
                }
            }
        }
        stats
    }
}

#[cfg(test)]
#[path = "bem_tests.rs"]
mod tests;
