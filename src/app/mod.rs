//! Application glue module
//!
//! Configuration and logging setup shared by the binaries.

mod config;

pub use config::{default_config_path, Config, ConfigError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr `tracing` subscriber
///
/// `RUST_LOG` wins over `default_filter` when set. Does nothing if a global
/// subscriber is already installed.
pub fn init_logging(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
