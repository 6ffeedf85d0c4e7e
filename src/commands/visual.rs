use std::fmt::Write;

use crate::cli::{Cli, VisualAction, VisualArgs};
use crate::config::VisualConfig;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::{CaseProgress, print_css_guard_error};
use crate::report::RunReport;
use crate::visual::{
    ArtifactStore, ImageDiffer, PlaywrightRenderer, Renderer, TestCase, VisualPipeline,
    VisualResult, differ_for, suite_from_config,
};
use crate::{CssGuardError, EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, format_report, load_config, write_output};

pub(crate) const VISUAL_TITLE: &str = "Visual regression";

#[must_use]
pub fn run_visual(args: &VisualArgs, cli: &Cli) -> i32 {
    match run_visual_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_css_guard_error(color_choice_to_mode(cli.color), &e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the visual suite, or promotes current screenshots with `visual update`.
///
/// # Errors
/// Returns an error if the configuration is invalid, a requested case does not
/// exist, the artifact directories cannot be prepared, or a baseline copy fails.
pub fn run_visual_impl(args: &VisualArgs, cli: &Cli) -> Result<i32> {
    let mut visual = load_config(args.config.as_deref(), cli.no_config)?
        .config
        .visual;
    apply_cli_overrides(&mut visual, args)?;

    if matches!(args.action, Some(VisualAction::Update)) {
        let updated = update_baselines(&RealFileSystem, &visual)?;
        if !cli.quiet {
            print!("{}", format_update_summary(&updated));
        }
        return Ok(EXIT_SUCCESS);
    }

    let cases = select_cases(suite_from_config(&visual), &args.cases)?;
    let renderer = PlaywrightRenderer::new(visual.node.clone());
    let differ = differ_for(&visual);
    let report = run_suite(
        &RealFileSystem,
        &visual,
        &renderer,
        differ.as_ref(),
        &cases,
        cli.quiet,
    )?;

    let color = color_choice_to_mode(cli.color);
    let output = format_report(args.format, color, VISUAL_TITLE, &report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(visual_exit_code(&report))
}

fn apply_cli_overrides(visual: &mut VisualConfig, args: &VisualArgs) -> Result<()> {
    if let Some(workers) = args.workers {
        if workers == 0 {
            return Err(CssGuardError::Config(
                "--workers must be at least 1".to_string(),
            ));
        }
        visual.workers = workers;
    }
    if let Some(engine) = args.diff_engine {
        visual.diff_engine = engine;
    }
    Ok(())
}

/// Keep only the named cases, in suite order. An empty filter keeps everything.
///
/// # Errors
/// Returns a `Config` error naming the first filter that matches no case.
pub(crate) fn select_cases(suite: Vec<TestCase>, names: &[String]) -> Result<Vec<TestCase>> {
    if names.is_empty() {
        return Ok(suite);
    }
    if let Some(unknown) = names
        .iter()
        .find(|name| !suite.iter().any(|case| &case.name == *name))
    {
        let known: Vec<&str> = suite.iter().map(|case| case.name.as_str()).collect();
        return Err(CssGuardError::Config(format!(
            "Unknown test case '{unknown}'. Available: {}",
            known.join(", ")
        )));
    }
    Ok(suite
        .into_iter()
        .filter(|case| names.contains(&case.name))
        .collect())
}

/// Evaluate `cases` with a progress bar on stderr.
///
/// # Errors
/// Returns an error if the artifact directories cannot be prepared.
pub(crate) fn run_suite(
    fs: &dyn FileSystem,
    visual: &VisualConfig,
    renderer: &dyn Renderer,
    differ: &dyn ImageDiffer,
    cases: &[TestCase],
    quiet: bool,
) -> Result<RunReport<VisualResult>> {
    tracing::info!(
        cases = cases.len(),
        workers = visual.workers,
        root = %visual.screens_root.display(),
        "running visual suite"
    );
    let store = ArtifactStore::new(fs, visual.screens_root.clone());
    let pipeline = VisualPipeline::new(store, renderer, differ)
        .workers(visual.workers)
        .timeout_ms(visual.timeout_ms);

    let progress = CaseProgress::new(cases.len() as u64, quiet);
    let report = pipeline.run_with_progress(cases, |result| progress.inc(result.name()));
    progress.finish();
    report
}

/// Copy every current screenshot over its baseline.
///
/// # Errors
/// Returns an error if a copy fails.
pub(crate) fn update_baselines(fs: &dyn FileSystem, visual: &VisualConfig) -> Result<Vec<String>> {
    ArtifactStore::new(fs, visual.screens_root.clone()).update_baselines()
}

pub(crate) fn format_update_summary(updated: &[String]) -> String {
    if updated.is_empty() {
        return "No current screenshots to promote.\n".to_string();
    }
    let mut out = String::new();
    for name in updated {
        let _ = writeln!(out, "Updated baseline: {name}");
    }
    let _ = writeln!(out, "{} baseline(s) updated.", updated.len());
    out
}

pub(crate) fn visual_exit_code(report: &RunReport<VisualResult>) -> i32 {
    if report.has_failures() {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "visual_tests.rs"]
mod tests;
