//! Error and warning output on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::CssGuardError;

use super::ColorMode;
use super::ansi;

/// Stderr diagnostic writer with optional color.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal(),
        };
        Self { use_colors }
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Writes an error block.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, ansi::RED, &format!("✖ {error_type}:"), message, detail, suggestion);
    }

    /// Writes a warning block.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, ansi::YELLOW, "⚠ Warning:", message, detail, suggestion);
    }

    /// Writes a crate error using its category, message, cause and hint.
    pub fn write_css_guard_error<W: Write>(&self, w: &mut W, err: &CssGuardError) {
        let detail = err.detail();
        self.write_error(
            w,
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    fn write_block<W: Write>(
        &self,
        w: &mut W,
        color: &str,
        headline: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing useful can be done if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(w, "{}{color}{headline}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{headline} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

/// Prints a crate error to stderr.
pub fn print_css_guard_error(mode: ColorMode, err: &CssGuardError) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::new(mode).write_css_guard_error(&mut stderr, err);
}

/// Prints an error with detail and suggestion to stderr.
pub fn print_error_full(
    mode: ColorMode,
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::new(mode).write_error(&mut stderr, error_type, message, detail, suggestion);
}

/// Prints a warning with detail and suggestion to stderr.
pub fn print_warning_full(
    mode: ColorMode,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::new(mode).write_warning(&mut stderr, message, detail, suggestion);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
