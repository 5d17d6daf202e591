//! Logging subscriber initialisation.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TAGDEX_LOG=debug`
pub const LOG_ENV: &str = "TAGDEX_LOG";

/// Filter from TAGDEX_LOG, else `default_level`, else `warn`.
pub fn build_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install a stderr fmt subscriber. Stdout stays reserved for results.
pub fn init(default_level: &str) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
