//! Structured JSON logging to stderr.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Install the global subscriber.
///
/// Quiet mode (the CLI default) turns logging off entirely; verbose mode logs
/// `debug` and above for mkcache crates. `RUST_LOG` overrides either default.
/// Calling this twice is harmless: the second install is ignored.
pub fn init_logging(quiet: bool) {
    let default_directive = if quiet {
        "off"
    } else {
        "mkcache=debug,mkcache_core=debug,mkcache_config=debug"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .with_span_list(false)
        .try_init();
}
