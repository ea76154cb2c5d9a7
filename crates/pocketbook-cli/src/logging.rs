use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV_VAR: &str = "POCKETBOOK_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Sends diagnostics to stderr so stdout stays parseable. The filter comes
/// from `POCKETBOOK_LOG` (for example `debug` or `pocketbook_client=trace`).
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let stderr_log = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(stderr_log.with_filter(filter))
        .try_init();
}
