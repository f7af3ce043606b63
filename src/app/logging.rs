//! Diagnostic logging setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::constants::LOG_ENV_VAR;

/// Map the `-v` count to a default level.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn make_env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(level.into())
        .from_env_lossy()
}

/// Install the global subscriber. Logs go to stderr so the script's stdout stays clean.
pub fn init_logging(verbosity: u8) {
    let output = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false);

    // A subscriber may already be installed when embedded as a library.
    let _ = tracing_subscriber::registry()
        .with(make_env_filter(level_for_verbosity(verbosity)))
        .with(output)
        .try_init();
}
