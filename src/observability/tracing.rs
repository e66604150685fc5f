//! Tracing subscriber setup.
//!
//! Configures structured logging with:
//! - `RUST_LOG` based filtering, falling back to a caller-chosen default
//! - Targets, thread ids and source locations on every event

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for a binary.
///
/// # Arguments
///
/// * `service_name` - Name recorded in the startup event
/// * `default_filter` - Filter used when `RUST_LOG` is unset or invalid
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(
    service_name: &str,
    default_filter: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(service = service_name, "Tracing initialized");
    Ok(())
}

/// Initialize tracing for tests (only logs errors).
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("error")
        .with_test_writer()
        .try_init();
}
