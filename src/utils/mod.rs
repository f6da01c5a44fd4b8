pub mod build_info;

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` directives are honoured; without any, only `lease_info` info events are shown.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lease_info=info"));

    // A subscriber may already be installed by an embedding application.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
