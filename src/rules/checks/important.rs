use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::css::Stylesheet;
use crate::error::{CssGuardError, Result};
use crate::rules::{Check, CheckResult, CssTree};

const IMPORTANT: &str = "!important";

/// Fails on any `!important` in a component file that is not explicitly exempt.
pub struct NoImportant {
    allowed: GlobSet,
}

impl NoImportant {
    /// # Errors
    /// Returns `InvalidGlob` if an allowed-file pattern does not compile.
    pub fn new(allowed_files: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in allowed_files {
            let glob = Glob::new(pattern).map_err(|source| CssGuardError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let allowed = builder.build().map_err(|source| CssGuardError::InvalidGlob {
            pattern: allowed_files.join(", "),
            source,
        })?;
        Ok(Self { allowed })
    }
}

impl Check for NoImportant {
    fn name(&self) -> &'static str {
        "No !important Declarations"
    }

    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let mut count = 0;
        let mut scanned = 0;
        let mut exempt = 0;
        let mut offenders = Vec::new();

        for component in tree.read_components()? {
            if self.allowed.is_match(&component.name) {
                exempt += 1;
                continue;
            }
            scanned += 1;
            let found = Stylesheet::count_occurrences(&component.source, IMPORTANT);
            if found > 0 {
                count += found;
                offenders.push(component.name);
            }
        }

        let exempt_note = if exempt > 0 {
            format!(" ({exempt} exempt)")
        } else {
            String::new()
        };

        if count == 0 {
            return Ok(CheckResult::passed(
                self.name(),
                format!("No !important declarations found in {scanned} component files{exempt_note}"),
            ));
        }

        Ok(CheckResult::failed(
            self.name(),
            format!(
                "Found {count} !important declarations in {} of {scanned} component files{exempt_note}: {}",
                offenders.len(),
                offenders.join(", ")
            ),
        ))
    }
}
