//! tinct: classify source files into highlighting categories.
//!
//! The binary is a thin argument parser over [`commands`]; everything it
//! does is reachable from here so integration tests can drive it without
//! spawning processes.

use std::sync::Once;

pub mod commands;
pub mod config;
mod error;

pub use config::{ClassifyConfig, OutputFormat};
pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
