use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for visual test cases, drawn on stderr.
///
/// Hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct CaseProgress {
    progress_bar: ProgressBar,
}

impl CaseProgress {
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid; it is a compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} Capturing [{bar:40.cyan/blue}] {pos}/{len} cases {msg}")
                    .expect("valid template")
                    .progress_chars("█▓░"),
            );
            pb
        };
        Self { progress_bar }
    }

    /// Record one finished case. Safe to call from worker threads.
    pub fn inc(&self, case: &str) {
        self.progress_bar.set_message(case.to_string());
        self.progress_bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
