use crate::error::Result;
use crate::rules::{Check, CheckResult, CssTree};

/// Counts component files carrying focus, ARIA and contrast signals.
pub struct Accessibility {
    min_signals: usize,
}

impl Accessibility {
    #[must_use]
    pub const fn new(min_signals: usize) -> Self {
        Self { min_signals }
    }
}

impl Check for Accessibility {
    fn name(&self) -> &'static str {
        "Accessibility Features"
    }

    fn evaluate(&self, tree: &CssTree<'_>) -> Result<CheckResult> {
        let mut focus = 0;
        let mut aria = 0;
        let mut contrast = 0;

        for component in tree.read_components()? {
            let src = &component.source;
            if src.contains(":focus") {
                focus += 1;
            }
            if src.contains("[aria-") || src.contains(".sr-only") {
                aria += 1;
            }
            if src.contains("outline") || src.contains("box-shadow") {
                contrast += 1;
            }
        }

        let total = focus + aria + contrast;
        let summary = format!(
            "{focus} focus styles, {aria} ARIA styles, {contrast} contrast features (total {total}, minimum {})",
            self.min_signals
        );

        Ok(if total >= self.min_signals {
            CheckResult::passed(self.name(), format!("Accessibility features: {summary}"))
        } else {
            CheckResult::warning(
                self.name(),
                format!("Limited accessibility features: {summary}"),
            )
        })
    }
}
