use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{
    Config, ConfigLoader, FileConfigLoader, LoadResult, validate_config_semantics,
};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, ReportFormatter, TextFormatter};
use crate::report::{Outcome, RunReport};

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load and validate the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed, or is
/// semantically invalid.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<LoadResult> {
    load_config_with(&FileConfigLoader::new(), config_path, no_config)
}

pub(crate) fn load_config_with(
    loader: &impl ConfigLoader,
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    validate_config_semantics(&loaded.config)?;
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "using configuration file"),
        None => tracing::info!("no configuration file found, using defaults"),
    }
    Ok(loaded)
}

/// Render a report in the requested format.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub(crate) fn format_report<R: Outcome>(
    format: OutputFormat,
    color: ColorMode,
    title: &str,
    report: &RunReport<R>,
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color).format(title, report),
        OutputFormat::Json => JsonFormatter
            .format(title, report)
            .map(|json| json + "\n"),
    }
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating parent
/// directories if needed). The `quiet` flag only affects stdout output.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
