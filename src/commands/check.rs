use crate::cli::{CheckArgs, Cli};
use crate::config::RulesConfig;
use crate::filesystem::{FileSystem, RealFileSystem};
use crate::output::print_css_guard_error;
use crate::report::RunReport;
use crate::rules::{CheckResult, RuleEngine};
use crate::{EXIT_CHECK_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, format_report, load_config, write_output};

pub(crate) const RULES_TITLE: &str = "CSS rule checks";

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_css_guard_error(color_choice_to_mode(cli.color), &e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the rule battery and writes the report.
///
/// # Errors
/// Returns an error if the configuration is invalid, the components directory
/// cannot be enumerated, or the report cannot be written.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut rules = load_config(args.config.as_deref(), cli.no_config)?.config.rules;
    if let Some(css_root) = &args.css_root {
        rules.css_root.clone_from(css_root);
    }

    let report = run_rules(&RealFileSystem, &rules)?;

    let color = color_choice_to_mode(cli.color);
    let output = format_report(args.format, color, RULES_TITLE, &report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(rules_exit_code(&report, args.strict))
}

/// Build the configured battery and evaluate it against `rules.css_root`.
pub(crate) fn run_rules(fs: &dyn FileSystem, rules: &RulesConfig) -> Result<RunReport<CheckResult>> {
    RuleEngine::from_config(rules)?.run(fs, &rules.css_root)
}

pub(crate) fn rules_exit_code(report: &RunReport<CheckResult>, strict: bool) -> i32 {
    if report.has_failures() || (strict && report.has_warnings()) {
        EXIT_CHECK_FAILED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
