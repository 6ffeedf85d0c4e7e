use std::path::Path;

use rayon::prelude::*;

use crate::config::RulesConfig;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::report::RunReport;

use super::checks::battery;
use super::{Check, CheckResult, CssTree};

/// Evaluates the check battery and aggregates the results.
pub struct RuleEngine {
    checks: Vec<Box<dyn Check>>,
}

impl RuleEngine {
    /// # Errors
    /// Returns an error if a configured regex or glob does not compile.
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        Ok(Self::with_checks(battery(config)?))
    }

    #[must_use]
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every check against the tree rooted at `root`.
    ///
    /// Checks are evaluated in parallel; the report keeps battery order. A check
    /// that errors is recorded as `Failed` with the error text and does not stop
    /// the others.
    ///
    /// # Errors
    /// Returns `MissingInput` if `<root>/components` does not exist, since no
    /// check can be evaluated without it.
    pub fn run(&self, fs: &dyn FileSystem, root: &Path) -> Result<RunReport<CheckResult>> {
        let tree = CssTree::load(fs, root)?;
        tracing::info!(
            root = %root.display(),
            components = tree.component_names().len(),
            "running rule checks"
        );

        let results: Vec<CheckResult> = self
            .checks
            .par_iter()
            .map(|check| {
                let result = check
                    .evaluate(&tree)
                    .unwrap_or_else(|e| CheckResult::failed(check.name(), e.describe()));
                tracing::debug!(check = check.name(), status = %result.status(), "check evaluated");
                result
            })
            .collect();

        Ok(RunReport::from_results(results))
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
