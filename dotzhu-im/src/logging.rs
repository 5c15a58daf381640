//! Logging initialization for host embeddings

use std::sync::Once;

static INIT_LOGGING: Once = Once::new();

/// Initialize the tracing subscriber once. Filter level comes from
/// `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
