//! Tracing subscriber set-up for the `autotask` binary.
//!
//! The library only emits `tracing` spans and events; installing a
//! subscriber is left to the binary so embedders keep control of output.

use crate::config::LogFormat;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Reads `RUST_LOG`, defaulting to [`DEFAULT_FILTER`]. Output goes to
/// stderr so stdout stays free for workflow commands.
///
/// ```bash
/// RUST_LOG=autotask=debug autotask --log-format json
/// ```
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .init(),
    }
}
