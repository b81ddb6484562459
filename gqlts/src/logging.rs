//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `GQLTS_LOG=debug`.
pub const LOG_ENV: &str = "GQLTS_LOG";

/// Install a stderr subscriber so stdout only carries generated code.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
