use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::rules::{Check, CheckResult, CssTree};

pub(crate) const VARIABLES_FILE: &str = "variables.css";

static CUSTOM_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[a-zA-Z0-9-]+:").expect("Invalid regex"));

/// Counts `--name:` declarations in `base/variables.css`.
pub struct CustomProperties {
    min_count: usize,
}

impl CustomProperties {
    #[must_use]
    pub const fn new(min_count: usize) -> Self {
        Self { min_count }
    }
}

impl Check for CustomProperties {
    fn name(&self) -> &'static str {
        "CSS Custom Properties"
    }

    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let Some(content) = tree.read_base_file(VARIABLES_FILE)? else {
            return Ok(CheckResult::failed(
                self.name(),
                format!(
                    "Variables file not found: {}",
                    tree.base_file(VARIABLES_FILE).display()
                ),
            ));
        };

        let count = CUSTOM_PROPERTY.find_iter(&content).count();
        if count >= self.min_count {
            Ok(CheckResult::passed(
                self.name(),
                format!("Found {count} custom properties (minimum {})", self.min_count),
            ))
        } else {
            Ok(CheckResult::warning(
                self.name(),
                format!(
                    "Only {count} custom properties found (expected {}+)",
                    self.min_count
                ),
            ))
        }
    }
}
