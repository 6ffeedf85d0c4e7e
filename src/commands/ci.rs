use serde::Serialize;

use crate::cli::{CiArgs, Cli};
use crate::filesystem::RealFileSystem;
use crate::output::{ColorMode, JsonReport, OutputFormat, print_css_guard_error};
use crate::report::RunReport;
use crate::rules::CheckResult;
use crate::visual::{PlaywrightRenderer, VisualResult, differ_for, suite_from_config};
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::check::{RULES_TITLE, rules_exit_code, run_rules};
use super::context::{color_choice_to_mode, format_report, load_config, write_output};
use super::visual::{VISUAL_TITLE, run_suite, visual_exit_code};

#[derive(Serialize)]
struct CiReport {
    rules: JsonReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    visual: Option<JsonReport>,
}

#[must_use]
pub fn run_ci(args: &CiArgs, cli: &Cli) -> i32 {
    match run_ci_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_css_guard_error(color_choice_to_mode(cli.color), &e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the rule battery, then the visual suite unless `--skip-visual`.
///
/// # Errors
/// Returns an error if the configuration is invalid, the components directory
/// cannot be enumerated, or the artifact directories cannot be prepared.
pub fn run_ci_impl(args: &CiArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?.config;

    let rules = run_rules(&RealFileSystem, &config.rules)?;

    let visual = if args.skip_visual {
        tracing::info!("visual suite skipped");
        None
    } else {
        let cases = suite_from_config(&config.visual);
        let renderer = PlaywrightRenderer::new(config.visual.node.clone());
        let differ = differ_for(&config.visual);
        Some(run_suite(
            &RealFileSystem,
            &config.visual,
            &renderer,
            differ.as_ref(),
            &cases,
            cli.quiet,
        )?)
    };

    let color = color_choice_to_mode(cli.color);
    let output = format_ci_report(args.format, color, &rules, visual.as_ref())?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(ci_exit_code(&rules, visual.as_ref(), args.strict))
}

/// Both reports in one document: consecutive sections for text, one object for JSON.
pub(crate) fn format_ci_report(
    format: OutputFormat,
    color: ColorMode,
    rules: &RunReport<CheckResult>,
    visual: Option<&RunReport<VisualResult>>,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = format_report(format, color, RULES_TITLE, rules)?;
            if let Some(visual) = visual {
                out.push('\n');
                out.push_str(&format_report(format, color, VISUAL_TITLE, visual)?);
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let document = CiReport {
                rules: JsonReport::from_report(rules),
                visual: visual.map(JsonReport::from_report),
            };
            Ok(serde_json::to_string_pretty(&document)? + "\n")
        }
    }
}

pub(crate) fn ci_exit_code(
    rules: &RunReport<CheckResult>,
    visual: Option<&RunReport<VisualResult>>,
    strict: bool,
) -> i32 {
    let visual_code = visual.map_or(EXIT_SUCCESS, visual_exit_code);
    if rules_exit_code(rules, strict) == EXIT_SUCCESS && visual_code == EXIT_SUCCESS {
        EXIT_SUCCESS
    } else {
        EXIT_CHECK_FAILED
    }
}

#[cfg(test)]
#[path = "ci_tests.rs"]
mod tests;
