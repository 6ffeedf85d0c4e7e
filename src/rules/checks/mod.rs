//! The check battery, in report order.

mod accessibility;
mod bem;
mod custom_properties;
mod important;
mod performance;
mod quality;
mod responsive;
mod structure;

pub use accessibility::Accessibility;
pub use bem::BemNaming;
pub use custom_properties::CustomProperties;
pub use important::NoImportant;
pub use performance::Performance;
pub use quality::CodeQuality;
pub use responsive::ResponsiveDesign;
pub use structure::ComponentStructure;

use crate::config::RulesConfig;
use crate::error::Result;

use super::{BemClassifier, Check};

/// Build all eight checks from the rule configuration.
///
/// # Errors
/// Returns an error if a configured regex or glob does not compile.
pub fn battery(config: &RulesConfig) -> Result<Vec<Box<dyn Check>>> {
    let classifier = BemClassifier::new(&config.bem)?;
    Ok(vec![
        Box::new(ComponentStructure::new(config.expected_components.clone())),
        Box::new(CustomProperties::new(config.custom_properties.min_count)),
        Box::new(BemNaming::new(
            classifier,
            config.bem.pass_below,
            config.bem.warn_below,
        )),
        Box::new(NoImportant::new(&config.important.allowed_files)?),
        Box::new(ResponsiveDesign::new(
            config.responsive.min_media_queries,
            config.responsive.min_breakpoints,
        )),
        Box::new(Accessibility::new(config.accessibility.min_signals)),
        Box::new(Performance::new(config.performance.clone())),
        Box::new(CodeQuality::new(config.quality.clone())),
    ])
}

/// `numerator / denominator`, defined as `0.0` for an empty denominator.
#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
