//! Log subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Pick the default filter directive for a verbosity level.
pub fn default_directive(verbose: u8, debug_log: bool) -> &'static str {
    if debug_log || verbose >= 2 {
        "jsonfill=debug"
    } else if verbose == 1 {
        "jsonfill=info"
    } else {
        "jsonfill=warn"
    }
}

/// Install the global fmt subscriber on stderr. `RUST_LOG` wins when set.
pub fn init(verbose: u8, debug_log: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, debug_log)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
