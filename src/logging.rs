//! Diagnostic logging for the binary
//!
//! Everything goes to stderr so stdout only ever carries version output.

use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive, e.g. `git_vers=debug`
pub const LOG_ENV: &str = "GIT_VERS_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Build the filter: `--verbose` wins, then `GIT_VERS_LOG`, then `warn`
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }

    match std::env::var(LOG_ENV) {
        Ok(spec) => EnvFilter::try_new(&spec).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        Err(_) => EnvFilter::new(DEFAULT_LEVEL),
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(env_filter(verbose))
        .try_init();

    if result.is_ok() {
        tracing::debug!(verbose, "logging initialized");
    }
}
