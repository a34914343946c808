//! CLI infrastructure for the geocache game
//!
//! Each command loads a saved session, acts on it, and saves it back.

pub mod commands;
pub mod config;
pub mod output;

use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
