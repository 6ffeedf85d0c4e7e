use std::fmt::Write;

use crate::error::Result;
use crate::report::{Outcome, RunReport, Status, Tally};

use super::{ColorMode, ReportFormatter, ansi};

/// Human-readable report: one line per result, then counts and the success rate.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_color(status: Status) -> &'static str {
        match status {
            Status::Pass => ansi::GREEN,
            Status::Warn => ansi::YELLOW,
            Status::Fail => ansi::RED,
            Status::New => ansi::BLUE,
            Status::Error => ansi::MAGENTA,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result<R: Outcome>(&self, result: &R, out: &mut String) {
        let status = result.status();
        let label = self.colorize(
            &format!("{} {:<5}", status.glyph(), status.as_str()),
            Self::status_color(status),
        );
        let _ = writeln!(out, "{label} {}: {}", result.name(), result.message());
    }

    fn format_summary(&self, tally: &Tally, out: &mut String) {
        let passed = self.colorize(&tally.passed.to_string(), ansi::GREEN);
        let warnings = self.colorize(&tally.warnings.to_string(), ansi::YELLOW);
        let failed = self.colorize(&tally.failed.to_string(), ansi::RED);

        let mut line = format!(
            "Summary: {} total, {passed} passed, {warnings} warnings, {failed} failed",
            tally.total
        );
        if tally.new > 0 {
            let _ = write!(line, ", {} new", self.colorize(&tally.new.to_string(), ansi::BLUE));
        }
        if tally.errors > 0 {
            let _ = write!(
                line,
                ", {} errors",
                self.colorize(&tally.errors.to_string(), ansi::MAGENTA)
            );
        }
        let _ = writeln!(out, "{line}");
        let _ = writeln!(out, "Success rate: {:.1}%", tally.success_rate());
    }

    /// Failures again at the end, with their diff artifacts, so they are not lost in long output.
    fn format_failures<R: Outcome>(&self, report: &RunReport<R>, out: &mut String) {
        let failures: Vec<&R> = report
            .results()
            .iter()
            .filter(|r| r.status().is_failure())
            .collect();
        if failures.is_empty() {
            return;
        }
        let _ = writeln!(out, "\n{}", self.colorize("Failures:", ansi::RED));
        for result in failures {
            let _ = writeln!(out, "  - {}: {}", result.name(), result.message());
            for (role, path) in result.artifacts() {
                if role == "diff" {
                    let _ = writeln!(out, "      {role}: {}", path.display());
                }
            }
        }
    }

    fn format_new<R: Outcome>(&self, report: &RunReport<R>, out: &mut String) {
        let mut new = report.with_status(Status::New).peekable();
        if new.peek().is_none() {
            return;
        }
        let _ = writeln!(out, "\n{}", self.colorize("New baselines:", ansi::BLUE));
        for result in new {
            let baseline = result
                .artifacts()
                .into_iter()
                .find(|(role, _)| *role == "baseline")
                .map(|(_, path)| path.display().to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "  - {}: {baseline}", result.name());
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format<R: Outcome>(&self, title: &str, report: &RunReport<R>) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{}\n", self.colorize(title, ansi::BOLD));

        for result in report.results() {
            self.format_result(result, &mut out);
        }
        if report.results().is_empty() {
            let _ = writeln!(out, "(nothing to report)");
        }

        let _ = writeln!(out);
        self.format_summary(report.tally(), &mut out);
        self.format_failures(report, &mut out);
        self.format_new(report, &mut out);

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
