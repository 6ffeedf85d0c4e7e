use std::path::{Path, PathBuf};

use crate::report::{Outcome, Status};

/// Outcome of one visual test case.
///
/// Artifact paths are carried only by the variants that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualResult {
    /// Current matches baseline.
    Passed {
        name: String,
        baseline: PathBuf,
        current: PathBuf,
    },
    /// No baseline existed; current was promoted to baseline.
    New {
        name: String,
        baseline: PathBuf,
        current: PathBuf,
    },
    /// Current differs from baseline.
    Failed {
        name: String,
        baseline: PathBuf,
        current: PathBuf,
        /// Absent when the differ reported a difference without an image.
        diff: Option<PathBuf>,
    },
    /// The case could not be evaluated: render, capture, storage or diff tooling failed.
    Error { name: String, message: String },
}

impl VisualResult {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Passed { name, .. }
            | Self::New { name, .. }
            | Self::Failed { name, .. }
            | Self::Error { name, .. } => name,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Passed { .. } => Status::Pass,
            Self::New { .. } => Status::New,
            Self::Failed { .. } => Status::Fail,
            Self::Error { .. } => Status::Error,
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Passed { .. } => "Visual test passed".to_string(),
            Self::New { baseline, .. } => {
                format!("New baseline created: {}", baseline.display())
            }
            Self::Failed { diff: Some(diff), .. } => {
                format!("Visual test failed; diff written to {}", diff.display())
            }
            Self::Failed { diff: None, .. } => "Visual test failed".to_string(),
            Self::Error { message, .. } => message.clone(),
        }
    }

    #[must_use]
    pub fn baseline(&self) -> Option<&Path> {
        match self {
            Self::Passed { baseline, .. }
            | Self::New { baseline, .. }
            | Self::Failed { baseline, .. } => Some(baseline),
            Self::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Path> {
        match self {
            Self::Passed { current, .. }
            | Self::New { current, .. }
            | Self::Failed { current, .. } => Some(current),
            Self::Error { .. } => None,
        }
    }

    #[must_use]
    pub fn diff(&self) -> Option<&Path> {
        match self {
            Self::Failed { diff, .. } => diff.as_deref(),
            _ => None,
        }
    }
}

impl Outcome for VisualResult {
    fn name(&self) -> &str {
        Self::name(self)
    }

    fn status(&self) -> Status {
        Self::status(self)
    }

    fn message(&self) -> String {
        Self::message(self)
    }

    fn artifacts(&self) -> Vec<(&'static str, &Path)> {
        [
            ("baseline", self.baseline()),
            ("current", self.current()),
            ("diff", self.diff()),
        ]
        .into_iter()
        .filter_map(|(role, path)| path.map(|p| (role, p)))
        .collect()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
