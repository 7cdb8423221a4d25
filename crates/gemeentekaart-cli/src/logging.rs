//! Logging setup for the CLI.
//!
//! Everything goes to stderr so stdout stays valid JSON. The level comes
//! from `RUST_LOG` when set, otherwise `warn` (or `debug` with `-v`).

use std::io;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
