//! Diagnostic logging setup.
//!
//! Logs go to stderr so that stdout carries only command output, which the
//! converters rely on.

use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "TB_LOG";

/// Picks the log filter directive.
///
/// An explicit `TB_LOG` or `RUST_LOG` wins; otherwise `warn`, raised to
/// `debug` by `--verbose` and lowered to `error` by `--quiet`.
pub fn filter_directive(verbose: bool, quiet: bool) -> String {
    [LOG_ENV, "RUST_LOG"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| {
            let level = if verbose {
                "debug"
            } else if quiet {
                "error"
            } else {
                "warn"
            };
            level.to_string()
        })
}

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: bool, quiet: bool) {
    let directive = filter_directive(verbose, quiet);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
