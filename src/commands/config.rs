use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader, validate_config_semantics};
use crate::output::print_css_guard_error;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            format!("Configuration is valid: {}\n", config.display())
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli)
        }
    };

    match result {
        Ok(output) => {
            if !cli.quiet {
                print!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_css_guard_error(color_choice_to_mode(cli.color), &e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    validate_with(&FileConfigLoader::new(), config_path)
}

pub(crate) fn validate_with(loader: &impl ConfigLoader, config_path: &Path) -> Result<()> {
    let loaded = loader.load_from_path(config_path)?;
    validate_config_semantics(&loaded.config)
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialization fails.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    cli: &Cli,
) -> Result<String> {
    let config = load_config(config_path, cli.no_config)?.config;
    render_config(&config, format)
}

pub(crate) fn render_config(config: &Config, format: ConfigOutputFormat) -> Result<String> {
    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Toml => Ok(toml::to_string_pretty(config)?),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
