//! Logging initialization using the `tracing` crate.
//!
//! This module configures the tracing subscriber:
//! - Uses `RUST_LOG` environment variable for filtering
//! - Writes to stderr so command output on stdout stays machine-readable
//! - Compact format with targets and levels

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global tracing subscriber.
///
/// Call once at startup, before any logging occurs.
///
/// The log level can be controlled via the `RUST_LOG` environment variable:
/// - `RUST_LOG=debug` - Show debug and above
/// - `RUST_LOG=curtain=trace,warn` - Every mapping step for curtain, warn for others
///
/// Default level is `info` for release builds and `debug` for debug builds.
pub fn init() {
    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,curtain={default_level}")));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(true)
        .compact();

    // A second call (tests, embedding) keeps the first subscriber.
    if tracing_subscriber::registry().with(filter).with(subscriber).try_init().is_err() {
        return;
    }

    tracing::debug!("starting curtain");
}
