use tracing_subscriber::EnvFilter;

/// Default filter directive for a verbosity level.
///
/// `RUST_LOG` takes precedence when set.
#[must_use]
pub const fn default_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Installs the stderr diagnostics subscriber. Later calls are no-ops.
pub fn init(verbosity: u8, quiet: bool) {
    let level = default_directive(verbosity, quiet);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
