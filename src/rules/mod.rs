//! Static rule engine.
//!
//! Runs a fixed battery of independent checks against a stylesheet tree and
//! produces one [`CheckResult`] per check.

mod bem;
pub mod checks;
mod engine;
mod result;
mod tree;

pub use bem::{BemClassifier, BemStats};
pub use engine::RuleEngine;
pub use result::CheckResult;
pub use tree::{Component, CssTree};

use crate::error::Result;

pub trait Check: Send + Sync {
    /// Stable display name, used as the result key.
    fn name(&self) -> &'static str;

    /// Evaluate the check against a snapshot of the stylesheet tree.
    ///
    /// Missing optional inputs are reported as a `Failed` result; an `Err` means
    /// the check could not be evaluated at all.
    ///
    /// # Errors
    /// Returns an error if a file the check depends on cannot be read.
    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult>;
}
