//! Logging init: structured events to stderr, stdout stays reserved for verdicts.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Quiet unless something went wrong.
const DEFAULT_FILTER: &str = "warn";

/// Initialize logging to stderr.
///
/// Safe to call more than once; later calls are no-ops so tests and
/// embedders that install their own subscriber are left alone.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("urlcheck logging initialized");
    }
}
