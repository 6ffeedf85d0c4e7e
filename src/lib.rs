pub mod cli;
pub mod commands;
pub mod config;
pub mod css;
pub mod error;
pub mod filesystem;
pub mod logging;
pub mod output;
pub mod report;
pub mod rules;
pub mod visual;

pub use error::{CssGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
