//! Logging setup using tracing
//!
//! Logs go to stderr so command output on stdout stays clean. The filter is
//! read from `STOREKEEP_LOG` (env-filter syntax) and otherwise defaults to
//! warnings, or debug output with `--verbose`.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an env-filter directive, e.g. `storekeep=debug`
pub const LOG_ENV: &str = "STOREKEEP_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "storekeep=debug"
    } else {
        "storekeep=warn"
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
