//! Core crate for Tidecast: process-wide configuration and logging setup.

pub mod config;

pub use config::{Config, ServiceConfig, ValidationResult};

use anyhow::Result;

/// Initialize logging for the host process.
///
/// Call once at startup, before any service client is constructed.
pub fn init() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Tidecast core initialized");
    Ok(())
}
