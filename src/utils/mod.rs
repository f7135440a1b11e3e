pub mod build_info;
pub mod paths;
pub mod persistence;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

const DEFAULT_FILTER: &str = "expense_tracker=warn";

/// Initializes the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with menu output; `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber installed by the host (tests, embedding apps) wins.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
