use crate::css::{Stylesheet, class_tokens};
use crate::error::Result;
use crate::rules::{BemClassifier, Check, CheckResult, CssTree};

const MAX_LISTED_OFFENDERS: usize = 5;

/// Share of class tokens in component selectors that are neither BEM-shaped nor excepted.
pub struct BemNaming {
    classifier: BemClassifier,
    pass_below: f64,
    warn_below: f64,
}

impl BemNaming {
    #[must_use]
    pub const fn new(classifier: BemClassifier, pass_below: f64, warn_below: f64) -> Self {
        Self {
            classifier,
            pass_below,
            warn_below,
        }
    }
}

impl Check for BemNaming {
    fn name(&self) -> &'static str {
        "BEM Naming Convention"
    }

    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let mut tokens = Vec::new();
        for component in tree.read_components()? {
            let sheet = Stylesheet::parse(&component.source);
            for rule in &sheet.rules {
                tokens.extend(class_tokens(&rule.selector));
            }
        }

        let stats = self
            .classifier
            .classify(tokens.iter().map(String::as_str));
        let rate = stats.violation_rate();

        let mut message = format!(
            "BEM compliance: {:.1}% ({}/{} violations, limit < {}%)",
            100.0 - rate,
            stats.violations,
            stats.total,
            self.pass_below
        );
        if !stats.offenders.is_empty() {
            let shown: Vec<&str> = stats
                .offenders
                .iter()
                .take(MAX_LISTED_OFFENDERS)
                .map(String::as_str)
                .collect();
            message.push_str(&format!("; e.g. {}", shown.join(", ")));
            if stats.offenders.len() > MAX_LISTED_OFFENDERS {
                message.push_str(&format!(
                    " (+{} more)",
                    stats.offenders.len() - MAX_LISTED_OFFENDERS
                ));
            }
        }

        Ok(if rate < self.pass_below {
            CheckResult::passed(self.name(), message)
        } else if rate < self.warn_below {
            CheckResult::warning(self.name(), message)
        } else {
            CheckResult::failed(self.name(), message)
        })
    }
}
