//! Logging initialization.
//!
//! Diagnostics go to stderr so that reports on stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "btdiff=warn",
        1 => "btdiff=info",
        _ => "btdiff=debug",
    }
}

/// Install the stderr subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this more than once
/// is harmless: later calls leave the first subscriber in place.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
