use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DiffEngine;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "css-guard")]
#[command(author, version, about = "CSS quality guard - static rules and visual regression")]
#[command(long_about = "Runs static quality rules over a component stylesheet tree and \
    compares rendered screenshots against stored baselines.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - At least one check failed or errored\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the static CSS rule battery
    Check(CheckArgs),

    /// Run the visual regression suite
    Visual(VisualArgs),

    /// Run the rule battery followed by the visual suite
    Ci(CiArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Stylesheet root containing `components/` (overrides config `css_root`)
    #[arg(long)]
    pub css_root: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct VisualArgs {
    #[command(subcommand)]
    pub action: Option<VisualAction>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run only the named test case (can be specified multiple times)
    #[arg(long = "case")]
    pub cases: Vec<String>,

    /// Number of test cases evaluated concurrently (overrides config `workers`)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Screenshot comparison engine (overrides config `diff_engine`)
    #[arg(long, value_parser = parse_diff_engine)]
    pub diff_engine: Option<DiffEngine>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum VisualAction {
    /// Promote every current screenshot to the baseline set
    Update,
}

#[derive(Parser, Debug)]
pub struct CiArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip the visual regression suite
    #[arg(long)]
    pub skip_visual: bool,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat rule warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".css-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and semantics
    Validate {
        /// Path to configuration file (default: .css-guard.toml)
        #[arg(short, long, default_value = ".css-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigOutputFormat,
    },
}

fn parse_diff_engine(s: &str) -> Result<DiffEngine, String> {
    match s.to_lowercase().as_str() {
        "pixel" => Ok(DiffEngine::Pixel),
        "imagemagick" | "magick" => Ok(DiffEngine::ImageMagick),
        _ => Err(format!("Unknown diff engine: {s} (expected pixel or imagemagick)")),
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
