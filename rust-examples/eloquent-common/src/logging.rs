//! Logging setup for the demo binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to whoever owns `main`.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Maps a `-v` count to a filter directive.
///
/// # Example
/// ```
/// use eloquent_common::logging::filter_for_verbosity;
/// assert_eq!(filter_for_verbosity(0), "warn");
/// assert_eq!(filter_for_verbosity(1), "info");
/// assert_eq!(filter_for_verbosity(5), "trace");
/// ```
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => DEFAULT_FILTER,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs a stderr `fmt` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter comes from `verbose`.
/// Returns `false` if a global subscriber was already installed.
pub fn init(verbose: u8) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "tracing initialized");
    }
    installed
}
