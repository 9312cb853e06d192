//! Logging setup shared by the CLI and the RPC server.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr;
/// stdout carries gallery output and RPC responses. A second call is a no-op.
pub fn init_logging(default_filter: &str) {
    // Already installed (tests, repeated setup): keep the first subscriber.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok();
}
