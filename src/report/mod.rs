//! Shared result model for both engines.
//!
//! Each check or visual test case produces an immutable value implementing
//! [`Outcome`]. A [`RunReport`] is a pure fold over those values: counts are
//! summed, never mutated in place, so the order results arrive in does not
//! affect the tally.

use std::path::Path;

use serde::Serialize;

/// Outcome status shared by rule checks and visual test cases.
///
/// `Warn` is produced only by rule checks, `New` only by visual test cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Warn,
    Fail,
    New,
    Error,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Warn => "WARN",
            Self::Fail => "FAIL",
            Self::New => "NEW",
            Self::Error => "ERROR",
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Warn => "⚠",
            Self::Fail => "✗",
            Self::New => "✚",
            Self::Error => "‼",
        }
    }

    /// Statuses that make the process exit non-zero.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Fail | Self::Error)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can be summarized in a run report.
pub trait Outcome {
    fn name(&self) -> &str;
    fn status(&self) -> Status;
    fn message(&self) -> String;

    /// Files produced for this result, labelled by role.
    fn artifacts(&self) -> Vec<(&'static str, &Path)> {
        Vec::new()
    }
}

/// Per-status counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    pub passed: usize,
    pub warnings: usize,
    pub failed: usize,
    pub new: usize,
    pub errors: usize,
}

impl Tally {
    #[must_use]
    pub const fn record(mut self, status: Status) -> Self {
        self.total += 1;
        match status {
            Status::Pass => self.passed += 1,
            Status::Warn => self.warnings += 1,
            Status::Fail => self.failed += 1,
            Status::New => self.new += 1,
            Status::Error => self.errors += 1,
        }
        self
    }

    /// Percentage of results that did not fail: passed, warned and new.
    ///
    /// Defined as `0.0` for an empty run.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Counts are far below 2^52
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.passed + self.warnings + self.new) as f64 / self.total as f64 * 100.0
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.failed + self.errors > 0
    }
}

/// Aggregate over one engine's run.
#[derive(Debug, Clone)]
pub struct RunReport<R> {
    results: Vec<R>,
    tally: Tally,
}

impl<R: Outcome> RunReport<R> {
    #[must_use]
    pub fn from_results(results: Vec<R>) -> Self {
        let tally = results
            .iter()
            .fold(Tally::default(), |tally, r| tally.record(r.status()));
        Self { results, tally }
    }

    /// Build a report with results ordered by name for reproducible output.
    #[must_use]
    pub fn sorted_by_name(mut results: Vec<R>) -> Self {
        results.sort_by(|a, b| a.name().cmp(b.name()));
        Self::from_results(results)
    }

    #[must_use]
    pub fn results(&self) -> &[R] {
        &self.results
    }

    #[must_use]
    pub const fn tally(&self) -> &Tally {
        &self.tally
    }

    #[must_use]
    pub fn success_rate(&self) -> f64 {
        self.tally.success_rate()
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.tally.has_failures()
    }

    #[must_use]
    pub const fn has_warnings(&self) -> bool {
        self.tally.warnings > 0
    }

    /// Results with the given status, in report order.
    pub fn with_status(&self, status: Status) -> impl Iterator<Item = &R> {
        self.results.iter().filter(move |r| r.status() == status)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
