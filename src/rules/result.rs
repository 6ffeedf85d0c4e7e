use crate::report::{Outcome, Status};

/// Result of evaluating one check against the stylesheet tree.
///
/// Each variant carries the check name and a message with the measured values
/// and the thresholds they were compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed { name: String, message: String },
    Warning { name: String, message: String },
    Failed { name: String, message: String },
}

impl CheckResult {
    pub fn passed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Passed {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Warning {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// `Passed` when `ok`, otherwise `Warning`.
    pub fn pass_or_warn(ok: bool, name: impl Into<String>, message: impl Into<String>) -> Self {
        if ok {
            Self::passed(name, message)
        } else {
            Self::warning(name, message)
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Passed { name, .. } | Self::Warning { name, .. } | Self::Failed { name, .. } => {
                name
            }
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Passed { message, .. }
            | Self::Warning { message, .. }
            | Self::Failed { message, .. } => message,
        }
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Passed { .. } => Status::Pass,
            Self::Warning { .. } => Status::Warn,
            Self::Failed { .. } => Status::Fail,
        }
    }

    // Predicate methods

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl Outcome for CheckResult {
    fn name(&self) -> &str {
        Self::name(self)
    }

    fn status(&self) -> Status {
        Self::status(self)
    }

    fn message(&self) -> String {
        Self::message(self).to_string()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
