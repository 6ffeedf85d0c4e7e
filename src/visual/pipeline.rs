use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::error::{CssGuardError, Result};
use crate::report::RunReport;

use super::artifacts::{ArtifactStore, Role};
use super::case::TestCase;
use super::diff::ImageDiffer;
use super::render::{CaptureRequest, Renderer};
use super::result::VisualResult;

/// Drives capture, baseline bookkeeping and comparison for a suite of cases.
pub struct VisualPipeline<'a> {
    store: ArtifactStore<'a>,
    renderer: &'a dyn Renderer,
    differ: &'a dyn ImageDiffer,
    workers: usize,
    timeout_ms: u64,
}

impl<'a> VisualPipeline<'a> {
    #[must_use]
    pub fn new(
        store: ArtifactStore<'a>,
        renderer: &'a dyn Renderer,
        differ: &'a dyn ImageDiffer,
    ) -> Self {
        Self {
            store,
            renderer,
            differ,
            workers: 1,
            timeout_ms: 5000,
        }
    }

    #[must_use]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    #[must_use]
    pub const fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    #[must_use]
    pub const fn store(&self) -> &ArtifactStore<'a> {
        &self.store
    }

    /// Evaluate every case, up to `workers` at a time.
    ///
    /// # Errors
    /// Returns an error only if the artifact directories cannot be created or the
    /// worker pool cannot be started; per-case failures become `Error` results.
    pub fn run(&self, cases: &[TestCase]) -> Result<RunReport<VisualResult>> {
        self.run_with_progress(cases, |_| {})
    }

    /// Like [`run`](Self::run), calling `on_done` as each case finishes.
    ///
    /// # Errors
    /// See [`run`](Self::run).
    pub fn run_with_progress<P>(
        &self,
        cases: &[TestCase],
        on_done: P,
    ) -> Result<RunReport<VisualResult>>
    where
        P: Fn(&VisualResult) + Sync,
    {
        self.store.ensure_dirs()?;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| {
                CssGuardError::Config(format!(
                    "cannot start {} visual workers: {e}",
                    self.workers
                ))
            })?;

        let results: Vec<VisualResult> = pool.install(|| {
            cases
                .par_iter()
                .map(|case| {
                    let result = self.run_case(case);
                    tracing::debug!(case = %case.name, status = %result.status(), "case finished");
                    on_done(&result);
                    result
                })
                .collect()
        });

        Ok(RunReport::sorted_by_name(results))
    }

    /// Evaluate one case. Never panics or aborts; failures become `Error`.
    #[must_use]
    pub fn run_case(&self, case: &TestCase) -> VisualResult {
        let name = case.name.clone();
        match self.evaluate(case) {
            Ok(result) => result,
            Err(message) => VisualResult::Error { name, message },
        }
    }

    fn evaluate(&self, case: &TestCase) -> std::result::Result<VisualResult, String> {
        let captured = self.capture(case)?;
        let name = case.name.as_str();

        let current = self
            .store
            .write(Role::Current, name, &captured)
            .map_err(|e| e.describe())?;

        if !self.store.exists(Role::Baseline, name) {
            let baseline = self.store.promote(name).map_err(|e| e.describe())?;
            self.clear_stale_diff(name);
            tracing::info!(case = name, "baseline created");
            return Ok(VisualResult::New {
                name: name.to_string(),
                baseline,
                current,
            });
        }

        let baseline_path = self.store.path(Role::Baseline, name);
        let baseline_bytes = self
            .store
            .read(Role::Baseline, name)
            .map_err(|e| e.describe())?;

        let outcome = if Sha256::digest(&baseline_bytes) == Sha256::digest(&captured) {
            None
        } else {
            let outcome = self
                .differ
                .compare(&baseline_bytes, &captured)
                .map_err(|e| format!("Comparison unavailable: {e}"))?;
            outcome.different.then_some(outcome)
        };

        match outcome {
            None => {
                self.clear_stale_diff(name);
                Ok(VisualResult::Passed {
                    name: name.to_string(),
                    baseline: baseline_path,
                    current,
                })
            }
            Some(outcome) => {
                let diff = match outcome.diff_image {
                    Some(bytes) => Some(
                        self.store
                            .write(Role::Diff, name, &bytes)
                            .map_err(|e| e.describe())?,
                    ),
                    None => {
                        self.clear_stale_diff(name);
                        None
                    }
                };
                Ok(VisualResult::Failed {
                    name: name.to_string(),
                    baseline: baseline_path,
                    current,
                    diff,
                })
            }
        }
    }

    /// Acquire a session, capture, and release the session before returning.
    fn capture(&self, case: &TestCase) -> std::result::Result<Vec<u8>, String> {
        let request = CaptureRequest {
            url: case.url.clone(),
            viewport: case.viewport,
            selector: case.selector.clone(),
            timeout_ms: self.timeout_ms,
        };
        let mut session = self.renderer.acquire().map_err(|e| e.to_string())?;
        session.capture(&request).map_err(|e| e.to_string())
    }

    fn clear_stale_diff(&self, name: &str) {
        match self.store.clear_diff(name) {
            Ok(true) => tracing::debug!(case = name, "removed stale diff"),
            Ok(false) => {}
            Err(e) => tracing::warn!(case = name, error = %e, "could not remove stale diff"),
        }
    }

    /// Copy every current capture over its baseline.
    ///
    /// # Errors
    /// Returns an error if any artifact cannot be copied.
    pub fn update_baselines(&self) -> Result<Vec<String>> {
        self.store.update_baselines()
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
