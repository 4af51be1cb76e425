use tracing::debug;
use tracing_subscriber::EnvFilter;
use zonecheck_domain::LoggingConfig;

/// Logs go to stderr; stdout carries only the check report.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    debug!("Logging initialized at level: {}", config.level);
}
