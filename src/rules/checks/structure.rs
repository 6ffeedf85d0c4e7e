use crate::error::Result;
use crate::rules::{Check, CheckResult, CssTree};

/// Compares the files in `components/` against the expected component list.
pub struct ComponentStructure {
    expected: Vec<String>,
}

impl ComponentStructure {
    #[must_use]
    pub const fn new(expected: Vec<String>) -> Self {
        Self { expected }
    }
}

impl Check for ComponentStructure {
    fn name(&self) -> &'static str {
        "Component File Structure"
    }

    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let actual = tree.component_names();
        let missing: Vec<&str> = self
            .expected
            .iter()
            .filter(|name| !actual.contains(name))
            .map(String::as_str)
            .collect();
        let extra: Vec<&str> = actual
            .iter()
            .filter(|name| !self.expected.contains(name))
            .map(String::as_str)
            .collect();

        if missing.is_empty() && extra.is_empty() {
            return Ok(CheckResult::passed(
                self.name(),
                format!("All {} expected components present", self.expected.len()),
            ));
        }

        Ok(CheckResult::failed(
            self.name(),
            format!("Missing: {}. Extra: {}", list(&missing), list(&extra)),
        ))
    }
}

fn list(names: &[&str]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
