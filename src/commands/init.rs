use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::print_css_guard_error;
use crate::{CssGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_css_guard_error(color_choice_to_mode(cli.color), &e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs, cli: &Cli) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CssGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        CssGuardError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    if !cli.quiet {
        println!("Created configuration file: {}", output_path.display());
    }
    Ok(())
}

#[must_use]
pub const fn generate_config_template() -> &'static str {
    r#"# css-guard configuration file
version = "1"

[rules]
# Stylesheet root; must contain components/ and base/
css_root = "css"

# Component files expected under components/ (default: the house component list)
# expected_components = ["buttons.css", "navigation.css", "hero.css"]

[rules.custom_properties]
# Minimum custom property declarations in base/variables.css
min_count = 100

[rules.bem]
# Violation rate (%) below which the check passes, and below which it only warns
pass_below = 5.0
warn_below = 15.0

# Class prefixes accepted without BEM shape (default: layout, utility and site prefixes)
# allowed_prefixes = ["container", "row", "col", "btn", "d-", "text-"]

# Regex exceptions for class names
# allowed_patterns = ["^js-"]

[rules.important]
# Component files (globs) allowed to use !important
# allowed_files = ["bootstrap-custom.css"]

[rules.responsive]
min_media_queries = 5
min_breakpoints = 10

[rules.accessibility]
# Minimum focus, ARIA and contrast signals in base/accessibility.css
min_signals = 10

[rules.performance]
max_avg_bytes = 5000.0
max_avg_lines = 200.0
# Complex selectors per 100 lines
max_complex_rate = 10.0
# Compound selectors beyond this count make a selector complex
max_selector_parts = 3

[rules.quality]
min_comments_per_file = 2.0
max_empty_rate = 5.0
max_duplicate_rate = 2.0

[visual]
# Holds baseline/, current/ and diff/
screens_root = "tests/screenshots"
base_url = "http://localhost:4000"

# Test cases evaluated concurrently
workers = 1

# Bound on navigation and selector waits (milliseconds)
timeout_ms = 5000

# "pixel" (built in) or "imagemagick" (requires `compare` on PATH)
diff_engine = "pixel"
pixel_tolerance = 0

# Node.js executable used to drive Playwright
node = "node"

# Without cases or pages the built-in ten-case suite is used.

# [[visual.cases]]
# name = "contact-page"
# url = "/contact.html"
# viewport = { width = 1280, height = 800 }

# [[visual.viewports]]
# name = "mobile"
# width = 375
# height = 667

# [[visual.pages]]
# name = "home"
# path = "/"
# selectors = ["body", ".navbar"]
"#
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
