//! Logging setup for the service.
//!
//! Installs a global tracing subscriber writing to stdout. The filter defaults
//! to `info` and can be overridden through `RUST_LOG`.

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

const DEFAULT_FILTER: &str = "info";

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to write to stdout.
pub fn init() -> Result<(), LoggingError> {
    let subscriber = Registry::default()
        .with(build_env_filter())
        .with(fmt::layer().with_target(false).with_writer(std::io::stdout));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn build_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
