use std::env;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with console output
///
/// The filter comes from `LOG_LEVEL` (default "info"); standard
/// `RUST_LOG`-style directives are accepted.
pub fn init_logging() {
    let directive = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let env_filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .init();
}
