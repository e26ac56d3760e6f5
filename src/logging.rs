//! Log setup for the programs. Logs go to stderr so the printed lesson on
//! stdout stays readable; `RUST_LOG=debug` shows what the library does.

use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = installed {
        // Only happens on a second call; the first subscriber stays active.
        debug!(error = %e, "logging already initialized");
    }
}
