//! Configuration semantic validation.
//!
//! Validates that configuration values are semantically correct after parsing:
//! threshold ordering, pattern syntax, and the shape of visual test cases.

use std::collections::HashMap;

use crate::config::{Config, Viewport};
use crate::visual::suite_with_origins;
use crate::{CssGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if thresholds are out of order or negative, regex or glob
/// patterns do not compile, or visual cases are malformed.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_rule_thresholds(config)?;
    validate_patterns(config)?;
    validate_visual_section(config)?;
    Ok(())
}

fn validate_rule_thresholds(config: &Config) -> Result<()> {
    let bem = &config.rules.bem;
    if bem.pass_below < 0.0 || bem.warn_below < 0.0 {
        return Err(CssGuardError::Config(
            "rules.bem thresholds must not be negative".to_string(),
        ));
    }
    if bem.pass_below > bem.warn_below {
        return Err(CssGuardError::Config(format!(
            "rules.bem.pass_below ({}) must not exceed rules.bem.warn_below ({})",
            bem.pass_below, bem.warn_below
        )));
    }

    let perf = &config.rules.performance;
    let quality = &config.rules.quality;
    let limits = [
        ("rules.performance.max_avg_bytes", perf.max_avg_bytes),
        ("rules.performance.max_avg_lines", perf.max_avg_lines),
        ("rules.performance.max_complex_rate", perf.max_complex_rate),
        ("rules.quality.min_comments_per_file", quality.min_comments_per_file),
        ("rules.quality.max_empty_rate", quality.max_empty_rate),
        ("rules.quality.max_duplicate_rate", quality.max_duplicate_rate),
    ];
    for (key, value) in limits {
        if !value.is_finite() || value < 0.0 {
            return Err(CssGuardError::Config(format!(
                "{key} must be a non-negative number, got {value}"
            )));
        }
    }
    Ok(())
}

fn validate_patterns(config: &Config) -> Result<()> {
    for pattern in &config.rules.bem.allowed_patterns {
        regex::Regex::new(pattern).map_err(|e| CssGuardError::InvalidPattern {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    for pattern in &config.rules.important.allowed_files {
        globset::Glob::new(pattern).map_err(|e| CssGuardError::InvalidGlob {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}

fn validate_visual_section(config: &Config) -> Result<()> {
    let visual = &config.visual;
    if visual.workers == 0 {
        return Err(CssGuardError::Config(
            "visual.workers must be at least 1".to_string(),
        ));
    }
    if visual.timeout_ms == 0 {
        return Err(CssGuardError::Config(
            "visual.timeout_ms must be greater than 0".to_string(),
        ));
    }
    if visual.base_url.trim().is_empty() {
        return Err(CssGuardError::Config(
            "visual.base_url must not be empty".to_string(),
        ));
    }

    for (i, case) in visual.cases.iter().enumerate() {
        validate_name(&format!("visual.cases[{i}].name"), &case.name)?;
        validate_viewport(&format!("visual.cases[{i}].viewport"), case.viewport)?;
    }

    for (i, viewport) in visual.viewports.iter().enumerate() {
        validate_name(&format!("visual.viewports[{i}].name"), &viewport.name)?;
        validate_viewport(
            &format!("visual.viewports[{i}]"),
            Viewport::new(viewport.width, viewport.height),
        )?;
    }

    if !visual.pages.is_empty() && visual.viewports.is_empty() {
        return Err(CssGuardError::Config(
            "visual.pages requires at least one [[visual.viewports]] entry".to_string(),
        ));
    }
    for (i, page) in visual.pages.iter().enumerate() {
        validate_name(&format!("visual.pages[{i}].name"), &page.name)?;
        if page.selectors.is_empty() {
            return Err(CssGuardError::Config(format!(
                "visual.pages[{i}].selectors must not be empty"
            )));
        }
    }

    // Expanded page names share the artifact namespace with explicit cases.
    let mut origins: HashMap<String, String> = HashMap::new();
    for (origin, case) in suite_with_origins(visual) {
        if let Some(first) = origins.get(&case.name) {
            return Err(CssGuardError::Config(format!(
                "visual: duplicate case name '{}' produced by {first} and {origin}",
                case.name
            )));
        }
        origins.insert(case.name, origin);
    }
    Ok(())
}

/// Case names become file names under `baseline/`, `current/` and `diff/`.
fn validate_name(key: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CssGuardError::Config(format!("{key} must not be empty")));
    }
    if name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(CssGuardError::Config(format!(
            "{key} '{name}' must be a plain file name"
        )));
    }
    Ok(())
}

fn validate_viewport(key: &str, viewport: Viewport) -> Result<()> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(CssGuardError::Config(format!(
            "{key} must have a non-zero width and height, got {viewport}"
        )));
    }
    Ok(())
}
